use std::process;

fn main() {
    match graphsearch::solver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
