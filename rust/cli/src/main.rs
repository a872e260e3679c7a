use std::io;

fn main() {
    let args = std::env::args();
    let code = dudo_cli::run(args, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
