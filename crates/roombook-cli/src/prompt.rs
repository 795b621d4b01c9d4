use std::io::{self, Write};

use roombook_engine::Confirmation;

/// Yes/no gate shown before a delete is issued. `assume_yes` (the --yes
/// flag) skips the prompt. Anything but an explicit yes declines.
pub fn confirm_delete(what: &str, assume_yes: bool) -> Confirmation {
    if assume_yes {
        return Confirmation::Confirmed;
    }

    print!("Delete {}? [y/N] ", what);
    if io::stdout().flush().is_err() {
        return Confirmation::Declined;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return Confirmation::Declined;
    }

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Declined,
    }
}
