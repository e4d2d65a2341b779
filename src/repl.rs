use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::Parser;
use std::io::{self, Write};

static PROMPT: &str = ">> ";

static MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

pub fn start() {
    let env = Environment::new();

    loop {
        print!("{}", PROMPT);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        match Parser::new(Lexer::new(line)).parse_program() {
            Err(errors) => print_parser_errors(&errors),
            Ok(program) => match evaluator::eval(program.into(), &env) {
                Ok(Object::Null) => {}
                Ok(obj) => println!("{}", obj),
                Err(err) => println!("ERROR: {}", err),
            },
        }
    }
}

fn print_parser_errors(errors: &[String]) {
    print!("{}", MONKEY_FACE);
    println!("Woops! We ran into some monkey business here!");
    println!(" parser errors:");
    for err in errors.iter() {
        println!("\t{}", err);
    }
}
