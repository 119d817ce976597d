use crate::global_options::parse_config;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use pixcrypt::{is_package_path, load_image, Command, Outcome, Session};
use std::path::PathBuf;

pub fn create_and_exec_workflow_from_cmd(options: &ArgMatches) -> Result<()> {
    match options.subcommand() {
        Some(("encrypt", sub)) => encrypt(options, sub),
        Some(("decrypt", sub)) => decrypt(options, sub),
        Some(("roundtrip", sub)) => roundtrip(options, sub),
        Some((other, _)) => bail!("unknown subcommand {other}"),
        None => bail!("no subcommand given"),
    }
}

fn input(sub: &ArgMatches) -> Result<PathBuf> {
    sub.get_one::<PathBuf>("input")
        .cloned()
        .context("missing input path")
}

fn run(session: &mut Session, command: Command) -> Result<Outcome> {
    debug!("Running {command:?}");
    let description = format!("{command:?}");
    session
        .execute(command)
        .with_context(|| format!("{description} failed"))
}

fn encrypt(options: &ArgMatches, sub: &ArgMatches) -> Result<()> {
    let config = parse_config(options, sub, false)?;
    let mut session = Session::new(config);

    run(&mut session, Command::Upload(input(sub)?))?;
    let encrypted = run(&mut session, Command::Encrypt)?;
    println!("Encrypted image saved to {}", encrypted.path.display());

    if let Some(package) = sub.get_one::<PathBuf>("package") {
        let saved = run(&mut session, Command::SavePackage(package.clone()))?;
        println!("Package saved to {}", saved.path.display());
    }

    let codec = session.config().codec;
    if codec.mode.uses_key() {
        println!("Key: {} ({} mode). Use the same key to decrypt.", codec.key, codec.mode);
    }
    Ok(())
}

fn decrypt(options: &ArgMatches, sub: &ArgMatches) -> Result<()> {
    let config = parse_config(options, sub, true)?;
    let mut session = Session::new(config);
    let path = input(sub)?;

    if is_package_path(&path) {
        run(&mut session, Command::LoadPackage(path))?;
    } else {
        run(&mut session, Command::LoadEncrypted(path))?;
    }
    let decrypted = run(&mut session, Command::Decrypt)?;
    println!("Decrypted image saved to {}", decrypted.path.display());
    Ok(())
}

fn roundtrip(options: &ArgMatches, sub: &ArgMatches) -> Result<()> {
    let config = parse_config(options, sub, false)?;
    let mut session = Session::new(config);

    run(&mut session, Command::Upload(input(sub)?))?;
    run(&mut session, Command::Encrypt)?;
    let decrypted = run(&mut session, Command::Decrypt)?;

    let on_disk = load_image(&decrypted.path)
        .with_context(|| format!("cannot reload {}", decrypted.path.display()))?;
    let recovered = session.decrypted() == session.source() && Some(&on_disk) == session.source();
    if !recovered {
        bail!(
            "round trip mismatch: {} does not match the source pixels",
            decrypted.path.display()
        );
    }

    info!("Round trip verified for {}", decrypted.dimensions);
    println!("Round trip OK ({} pixels recovered exactly)", decrypted.dimensions);
    Ok(())
}
