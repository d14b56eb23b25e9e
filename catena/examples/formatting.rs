//! Directive substitution over heterogeneous arguments, including both of
//! the mismatch errors.

use catena::format::{render, DirectiveError, Lines};
use catena::prelude::*;

mod common;
use common::{aside, banner};

fn main() -> Result<(), DirectiveError> {
    banner("Directive substitution");
    let line = render("Hello, %s! You have %d new messages.", ("Alice", 5))?;
    println!("{}", line);
    println!("{}", render("%s is %d years old, %f meters tall", ("Ada", 36, 1.7))?);
    println!("{}", render("progress: 100%% done", ())?);
    aside("each % directive consumes the next argument; %% is a literal percent");

    banner("Mismatches are errors");
    println!("too few args:  {}", render("%d and %d", (1,)).unwrap_err());
    println!("too many args: {}", render("no directives", (1,)).unwrap_err());
    aside("an uncaught `?` on either of these would terminate the program");

    banner("Displaying every element");
    let list = (7.5, "hello", 42).into_list();
    print!("{}", Lines(&list));

    Ok(())
}
