use std::io::{self, Write};
use std::time::Instant;

use colored::Colorize;
use nalgebra::DMatrix;

use crate::core::format;
use crate::core::session::{Session, EIG_CONFIRM_SIZE, MAX_SIZE};

pub fn start() -> anyhow::Result<()> {
    banner();
    print_menu();

    let mut session = Session::new();
    loop {
        // Prompt
        print!(
            "{} {} {} ",
            "⟦MATBENCH⟧".bold().truecolor(0, 200, 255),
            stage(&session).truecolor(130, 130, 255),
            "›".truecolor(255, 240, 0)
        );
        io::stdout().flush().ok();

        // Read choice
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        match choice {
            "1" | "size" => set_size(&mut session)?,
            "2" | "gen" | "generate" => generate(&mut session),
            "3" | "mul" | "multiply" => multiply(&mut session),
            "4" | "inv" | "invert" => invert(&mut session),
            "5" | "det" | "determinant" => determinant(&session),
            "6" | "eig" | "eigenvalues" => eigenvalues(&session)?,
            "7" | "diag" | "diagonalize" => diagonalize(&mut session),
            "8" | "exit" | "quit" => break,
            "help" | "menu" | "?" => print_menu(),
            other => eprintln!(
                "{} unknown choice: {other} (type 'menu' to list options)",
                "err:".red().bold()
            ),
        }
    }

    Ok(())
}

fn set_size(session: &mut Session) -> anyhow::Result<()> {
    let Some(raw) = read_input(&format!("matrix size [1..{MAX_SIZE}]:"))? else {
        return Ok(());
    };
    let n: usize = match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{} '{raw}' is not a valid size", "err:".red().bold());
            return Ok(());
        }
    };
    match session.set_size(n) {
        Ok(()) => println!(
            "{} size set to {n}; matrices cleared",
            "ok:".green().bold()
        ),
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
    Ok(())
}

fn generate(session: &mut Session) {
    let started = Instant::now();
    match session.generate() {
        Ok(()) => {
            let elapsed = started.elapsed();
            let n = session.size().unwrap_or(0);
            println!(
                "{} generated A and B ({n}×{n}) in {elapsed:?}",
                "ok:".green().bold()
            );
            if let Some(a) = session.matrix_a() {
                print_preview("A", a);
            }
            if let Some(b) = session.matrix_b() {
                print_preview("B", b);
            }
        }
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
}

fn multiply(session: &mut Session) {
    let started = Instant::now();
    match session.multiply() {
        Ok(result) => {
            let elapsed = started.elapsed();
            println!(
                "{} result = A × B computed in {elapsed:?}",
                "ok:".green().bold()
            );
            print_preview("result", result);
        }
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
}

fn invert(session: &mut Session) {
    let started = Instant::now();
    match session.invert() {
        Ok(result) => {
            let elapsed = started.elapsed();
            println!("{} result inverted in {elapsed:?}", "ok:".green().bold());
            print_preview("result", result);
        }
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
}

fn determinant(session: &Session) {
    let started = Instant::now();
    match session.determinant() {
        Ok(det) => println!(
            "{} det(result) = {det:.6e} ({:?})",
            "ok:".green().bold(),
            started.elapsed()
        ),
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
}

fn eigenvalues(session: &Session) -> anyhow::Result<()> {
    // Cost warning before the decomposition starts; it cannot be
    // interrupted once running.
    if let Some(n) = session.size() {
        if session.multiplied() && n > EIG_CONFIRM_SIZE {
            let Some(answer) = read_input(&format!(
                "eigenvalue decomposition of a {n}×{n} matrix may take a while; continue? [y/N]"
            ))?
            else {
                return Ok(());
            };
            if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
                println!("{} eigenvalue computation skipped", "warn:".yellow().bold());
                return Ok(());
            }
        }
    }

    let started = Instant::now();
    match session.eigenvalues() {
        Ok(vals) => {
            let elapsed = started.elapsed();
            let shown = format::EIG_DISPLAY_LIMIT.min(vals.len());
            println!(
                "{} eigenvalues computed in {elapsed:?} (showing {shown} of {})",
                "ok:".green().bold(),
                vals.len()
            );
            for line in format::eigenvalue_lines(&vals) {
                println!("  {line}");
            }
        }
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
    Ok(())
}

fn diagonalize(session: &mut Session) {
    let started = Instant::now();
    match session.diagonalize() {
        Ok(result) => {
            let elapsed = started.elapsed();
            println!(
                "{} result reduced to its diagonal in {elapsed:?}",
                "ok:".green().bold()
            );
            print_preview("result", result);
        }
        Err(e) => eprintln!("{} {e}", "err:".red().bold()),
    }
}

fn print_preview(name: &str, m: &DMatrix<f64>) {
    let n = m.nrows();
    let k = format::PREVIEW_DIM.min(n);
    println!(
        "{}",
        format!("{name} (top-left {k}×{k} of {n}×{n}):").truecolor(130, 130, 255)
    );
    print!("{}", format::preview_block(m));
}

fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn stage(session: &Session) -> String {
    match session.size() {
        None => "n=?".into(),
        Some(n) if session.multiplied() => format!("n={n}·multiplied"),
        Some(n) if session.generated() => format!("n={n}·generated"),
        Some(n) => format!("n={n}"),
    }
}

fn banner() {
    println!(
        "\n{}\n{}\n{}  {}",
        "╔══════════════════════════════════════════════════╗".truecolor(0, 200, 255),
        "║          M a t b e n c h   C o n s o l e         ║"
            .truecolor(255, 240, 0)
            .bold(),
        "╚══════════════════════════════════════════════════╝".truecolor(0, 200, 255),
        "type 'menu' to list options".truecolor(130, 130, 255)
    );
}

fn print_menu() {
    println!(
        "{}\n  1. set matrix size         (size)\n  2. generate A and B        (gen)\n  3. multiply A × B          (mul)\n  4. invert result           (inv)\n  5. determinant of result   (det)\n  6. eigenvalues of result   (eig)\n  7. diagonalize result      (diag)\n  8. exit                    (quit)",
        "Matbench — dense matrix workbench".bold().truecolor(0, 200, 255),
    );
}
