use std::path::PathBuf;

use wireframe::{display, PixelBuffer, RenderConfig, Scene, Shape};

struct Args {
    config: Option<PathBuf>,
    scene: Option<PathBuf>,
    output: PathBuf,
    preview: bool,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        config: None,
        scene: None,
        output: PathBuf::from("wireframe.ppm"),
        preview: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--display" | "-d" => parsed.preview = true,
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    parsed.scene = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    parsed.output = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: wireframe [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config PATH, -c PATH  Render settings (JSON)");
                println!("  --scene PATH, -s PATH   Shapes to draw (JSON, default: built-in demo)");
                println!("  --output PATH, -o PATH  PPM file to write (default: wireframe.ppm)");
                println!("  --display, -d           Open the image in the configured viewer");
                println!("  --help                  Show this help message");
                std::process::exit(0);
            },
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    parsed
}

/// Shapes drawn when no scene file is given
fn demo_scene() -> Scene {
    Scene::new()
        .with_shape(Shape::Box {
            corner: [40.0, 460.0, 0.0],
            width: 120.0,
            height: 120.0,
            depth: 120.0,
        })
        .with_shape(Shape::Sphere {
            center: [370.0, 370.0, 0.0],
            radius: 90.0,
        })
        .with_shape(Shape::Torus {
            center: [250.0, 140.0, 0.0],
            r1: 25.0,
            r2: 90.0,
        })
        .with_shape(Shape::Circle {
            center: [250.0, 250.0, 0.0],
            radius: 60.0,
        })
        .with_shape(Shape::Hermite {
            p0: [20.0, 20.0],
            p1: [200.0, 60.0],
            r0: [0.0, 300.0],
            r1: [300.0, 0.0],
        })
        .with_shape(Shape::Bezier {
            p0: [300.0, 20.0],
            p1: [350.0, 200.0],
            p2: [430.0, 0.0],
            p3: [480.0, 60.0],
        })
}

fn main() -> Result<(), String> {
    let args = parse_args();

    let config = match &args.config {
        Some(path) => RenderConfig::load(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => RenderConfig::default(),
    };
    let scene = match &args.scene {
        Some(path) => Scene::load(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => demo_scene(),
    };

    println!("=== wireframe ===");
    println!("Buffer: {}x{}", config.height, config.width);
    println!("Shapes: {}", scene.shapes.len());

    let mut buffer = PixelBuffer::new(config.height, config.width);
    buffer.fill(config.background);

    let diagnostics = scene.render(&config, &mut buffer).map_err(|e| e.to_string())?;
    println!(
        "Drawn: {}  Culled: {}  Problems: {}",
        diagnostics.drawn,
        diagnostics.culled,
        diagnostics.events.len()
    );
    for event in &diagnostics.events {
        eprintln!("  {}", event);
    }

    buffer.save_ppm(&args.output).map_err(|e| e.to_string())?;
    println!("Wrote {}", args.output.display());

    if args.preview {
        display::display(&buffer, &config.viewer, &config.preview_path).map_err(|e| e.to_string())?;
    }

    Ok(())
}
