use clap::Parser;
use doxa::fof::SForm;
use doxa::BeliefBase;
use doxsh::{parse, Cli, Error, Kind};
use log::info;
use std::io::{BufRead, Write};

enum Outcome {
    Continue,
    Quit,
}

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        let code = match e.get_kind() {
            Kind::Os => 1,
            Kind::Syntax | Kind::Usage => 2,
        };
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut base: BeliefBase<String> = BeliefBase::new();

    match &cli.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)?;
            for line in script.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Outcome::Quit = exec(&mut base, line)? {
                    break;
                }
            }
        }
        None => {
            let stdin = std::io::stdin();
            let mut lines = stdin.lock().lines();
            loop {
                print!("> ");
                std::io::stdout().flush()?;
                let line = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };
                match exec(&mut base, line.trim()) {
                    Ok(Outcome::Continue) => (),
                    Ok(Outcome::Quit) => break,
                    // keep the session alive on bad input
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }

    if let Some(path) = &cli.json {
        let f = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(f, &base)?;
    }
    Ok(())
}

fn exec(base: &mut BeliefBase<String>, line: &str) -> Result<Outcome, Error> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    match cmd {
        "q" | "quit" => return Ok(Outcome::Quit),
        "show" => println!("{}", base),
        "clear" => *base = BeliefBase::new(),
        "add" | "expand" => {
            let (fm, p) = formula_priority(rest)?;
            info!("expand {} (priority {})", fm, p);
            base.expand(fm.clone(), p);
            println!("added {} (priority {})", fm, p);
        }
        "remove" => {
            let fm = parse::parse(rest)?;
            base.remove_belief(&fm);
            println!("removed {}", fm);
        }
        "entails" => {
            let fm = parse::parse(rest)?;
            let entailed = base.entails(&fm);
            info!("entails {}: {}", fm, entailed);
            println!("{}", entailed);
        }
        "contract" => {
            let fm = parse::parse(rest)?;
            info!("contract by {}", fm);
            base.contract(&fm);
            println!("contracted by {}", fm);
        }
        "revise" => {
            let (fm, p) = formula_priority(rest)?;
            info!("revise with {} (priority {})", fm, p);
            base.revise(fm.clone(), p);
            println!("revised with {} (priority {})", fm, p);
        }
        _ => {
            let msg = format!(
                "unknown command '{}'; available: \
                 add, remove, entails, contract, expand, revise, show, clear, q",
                cmd
            );
            return Err(Error::new(Kind::Usage, msg.into()));
        }
    }
    Ok(Outcome::Continue)
}

/// Split a command tail into a formula and its trailing priority.
fn formula_priority(rest: &str) -> Result<(SForm, u32), Error> {
    let (fm, p) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| Error::new(Kind::Usage, "expected a formula and a priority".into()))?;
    let p = p
        .parse()
        .map_err(|_| Error::new(Kind::Usage, format!("invalid priority '{}'", p).into()))?;
    if p == 0 {
        return Err(Error::new(Kind::Usage, "priority must be positive".into()));
    }
    Ok((parse::parse(fm)?, p))
}
