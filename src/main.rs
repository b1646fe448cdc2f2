use std::{env, fs::read_to_string, process};

use smallc::{
    errors::errors::{report, report_at, ErrorImpl, Severity},
    lexer::lexer::Lexer,
};

fn usage() {
    println!("Usage:");
    println!("     smallc <filename>");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        usage();
        process::exit(1);
    }

    let source = match read_to_string(&args[1]) {
        Ok(source) => source,
        Err(_) => {
            let unreadable = ErrorImpl::UnreadableFile {
                file: args[1].clone(),
            };
            report(Severity::Error, &unreadable.to_string());
            process::exit(1);
        }
    };

    let mut lexer = Lexer::new(&source);

    loop {
        match lexer.next_token() {
            Ok(token) => {
                if token.is_end() {
                    break;
                }
                token.debug();
            }
            Err(diagnostic) => {
                report_at(&diagnostic, &source);
                process::exit(1);
            }
        }
    }
}
