/* Generate command - emit builder sources for each manifest */

use super::common::{finish, load_invocation};
use builder_gen::diagnostics::TracingSink;
use builder_gen::filer::{DirectoryFiler, MemoryFiler};
use std::path::PathBuf;

pub fn run(
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    marker: Option<String>,
    stdout: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut total_errors = 0;
    let mut memory = MemoryFiler::new();
    let mut directory = DirectoryFiler::new(output_dir);

    if verbose {
        println!("Builder Generator");
        println!("=================\n");
        println!("[~] Configuration:");
        if stdout {
            println!("  Output: stdout");
        } else {
            println!("  Output directory: {}", directory.root().display());
        }
        println!("  Input files: {}", files.len());
        for file in &files {
            println!("    - {}", file.display());
        }
        println!();
    }

    /* Each manifest is an independent invocation */
    for file in &files {
        let invocation = load_invocation(file, marker.as_deref(), verbose)?;
        let mut diagnostics = TracingSink::new();

        let outcome = if stdout {
            invocation
                .processor
                .process(&invocation.candidates, &mut diagnostics, &mut memory)
        } else {
            invocation
                .processor
                .process(&invocation.candidates, &mut diagnostics, &mut directory)
        };
        total_errors += outcome.errors;

        match &outcome.generated {
            Some(name) if !stdout => match directory.written().last() {
                Some(path) => println!("[✓] Generated {} in {}", name, path.display()),
                None => println!("[✓] Generated {}", name),
            },
            Some(_) => {}
            None if verbose => println!("[~] {}: nothing generated", file.display()),
            None => {}
        }
    }

    if stdout {
        for (name, source) in &memory.units {
            if verbose {
                println!("// {}", name);
            }
            print!("{}", source);
        }
    }

    finish(total_errors)
}
