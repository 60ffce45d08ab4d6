use anyhow::Result;

fn main() -> Result<()> {
    let stdout = std::io::stdout();
    my_project::run(&mut stdout.lock())?;
    Ok(())
}
