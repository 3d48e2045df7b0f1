use std::io::{
    self,
    Write,
};

/// Prints `prompt` without a newline and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Reads a 1-based selection no greater than `upper_bound`, re-prompting
/// until the input is a number in range.
pub fn select_from_list(upper_bound: usize, prompt: &str) -> io::Result<usize> {
    let mut selection = read_line(prompt)?;
    loop {
        match selection.parse::<usize>() {
            Ok(number) if number >= 1 && number <= upper_bound => return Ok(number),
            _ => {
                println!("Please select one of the available options:");
                selection = read_line("")?;
            }
        }
    }
}
