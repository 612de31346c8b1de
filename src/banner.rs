pub fn print_startup_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("────────────────────────────────────────────────────────────");
    println!(" 🤖  node-nanny v{version} — tidying up your Node.js setup");
    println!("────────────────────────────────────────────────────────────");
    println!();
}
