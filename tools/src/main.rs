use linfn::LinearFunction;

const HELP: &str = "\
<function>  set the current function, eg: 2x+3 or 3 - 1.5x
f <x>       evaluate the current function at x
inv <y>     x for which f(x) = y
root        x for which f(x) = 0
trend       increasing or decreasing
help        this message";

fn summary(f: &LinearFunction) -> String {
    format!(
        "f(x) = {}  slope={} intercept={} root={} {}",
        f,
        f.slope(),
        f.intercept(),
        f.root(),
        if f.increasing() { "increasing" } else { "decreasing" }
    )
}

fn number(arg: &str) -> Result<f64, String> {
    arg.trim()
        .parse::<f64>()
        .map_err(|_| format!("Not a number: {:?}", arg.trim()))
}

// Run one REPL line against the current function, returning what to print
fn eval_line(current: &mut Option<LinearFunction>, line: &str) -> Result<String, String> {
    let line = line.trim();
    let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
    if cmd == "help" {
        return Ok(HELP.to_string());
    }
    if linfn::is_valid(line) {
        let f = linfn::parse(line).map_err(|e| e.to_string())?;
        log::debug!("current function is now {}", f);
        *current = Some(f);
        return Ok(summary(&f));
    }
    let f = match (cmd, current.as_ref()) {
        ("f" | "inv" | "root" | "trend", None) => {
            return Err("No function set, enter one like 2x+3".to_string());
        }
        (_, Some(f)) => f,
        _ => return Err(format!("Not a linear function: {:?}", line)),
    };
    match cmd {
        "f" => Ok(format!("{}", f.exec(number(arg)?))),
        "inv" => Ok(format!("{}", f.x_from_y(number(arg)?))),
        "root" => Ok(format!("{}", f.root())),
        "trend" if f.increasing() => Ok("increasing".to_string()),
        "trend" => Ok("decreasing".to_string()),
        _ => Err(format!("Not a linear function: {:?}", line)),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    if let Some(input) = args.next() {
        let f = linfn::parse(&input).map_err(|e| e.to_string())?;
        println!("{}", summary(&f));
        for x in args {
            let x = number(&x)?;
            println!("f({}) = {}", x, f.exec(x));
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut current = None;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match eval_line(&mut current, &line) {
                    Err(e) => println!("Err: {}", e),
                    Ok(out) => println!("{}", out),
                }
            }
        }
    }
}
