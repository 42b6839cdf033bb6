use anyhow::Result;

pub fn run() -> Result<()> {
    println!("treecat {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
