use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rand::prelude::*;

use iaps_sampler::{sample_paths, AffectCategory, Config};

/// Rough SAM-scale valence bands the generated pictures are spread over.
const BUCKETS: &[(&str, f64, f64)] = &[
    ("positive", 7.0, 8.5),
    ("negative", 1.5, 3.0),
    ("neutral", 4.0, 6.0),
];

const PER_BUCKET: usize = 20;

fn write_scoring_table(path: &Path, rng: &mut StdRng) -> Result<Vec<String>> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    // Seven preamble lines, like the tech-report export.
    writeln!(file, "SYNTHETIC NORMATIVE RATINGS")?;
    writeln!(file, "Generated stand-in for the licensed scoring table.")?;
    writeln!(file, "Do not use for actual experiments.")?;
    writeln!(file)?;
    writeln!(file, "All Subjects 1-20")?;
    writeln!(file)?;
    writeln!(
        file,
        "Description\tIAPS\tvalmn\tvalsd\taromn\tarosd\tdom1mn\tdom1sd\tdom2mn\tdom2sd\tset"
    )?;

    let mut ids = Vec::new();
    let mut next_id = 1000;
    for &(bucket, val_lo, val_hi) in BUCKETS {
        for i in 0..PER_BUCKET {
            // Sprinkle in a variant id and one of the uppercase-extension
            // pictures so both path forms get exercised.
            let id = match (bucket, i) {
                ("positive", 3) => "6570".to_string(),
                ("neutral", 5) => format!("{next_id}.1"),
                _ => next_id.to_string(),
            };
            next_id += 10;

            let valence = rng.random_range(val_lo..val_hi);
            let arousal = rng.random_range(2.0..7.0);
            let set = rng.random_range(1..=20);
            // Leave the occasional rating blank, as the real table does.
            let dom1 = if i % 7 == 0 {
                ".".to_string()
            } else {
                format!("{:.2}", rng.random_range(2.0..8.0))
            };

            writeln!(
                file,
                "{bucket} stim {i}\t{id}\t{valence:.2}\t{:.2}\t{arousal:.2}\t{:.2}\t{dom1}\t{:.2}\t.\t.\t{set}\\",
                rng.random_range(0.5..2.5),
                rng.random_range(0.5..2.5),
                rng.random_range(0.5..2.5),
            )?;
            ids.push(id);
        }
    }

    Ok(ids)
}

fn write_image_stubs(images_dir: &Path, ids: &[String]) -> Result<()> {
    fs::create_dir_all(images_dir)
        .with_context(|| format!("creating {}", images_dir.display()))?;
    for id in ids {
        let ext = if id == "6570" { "JPG" } else { "jpg" };
        File::create(images_dir.join(format!("{id}.{ext}")))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let root = Path::new("sample_iaps");
    let config = Config {
        scoring_path: root.join("AllSubjects_1-20.txt"),
        images_dir: root.join("images"),
    };
    fs::create_dir_all(root).with_context(|| format!("creating {}", root.display()))?;

    let mut rng = StdRng::seed_from_u64(42);
    let ids = write_scoring_table(&config.scoring_path, &mut rng)?;
    write_image_stubs(&config.images_dir, &ids)?;

    println!(
        "Wrote {} scoring records to {} with image stubs in {}",
        ids.len(),
        config.scoring_path.display(),
        config.images_dir.display()
    );

    // Round-trip through the library to prove the table parses.
    let catalog = iaps_sampler::load_scoring(&config)?;
    let drawn = sample_paths(&catalog, &AffectCategory::Positive.into(), 5, &mut rng)?;
    println!("Example positive draw:");
    for path in drawn {
        println!("  {}", path.display());
    }

    Ok(())
}
