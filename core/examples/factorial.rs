//! Prints factorials of a few inputs and the errors for invalid ones.
//!
//! Run with `cargo run -p greeter-core --example factorial`.

use greeter_core::{factorial, factorial_of};
use serde_json::json;

fn main() {
    println!("Small positive integers:");
    for n in 0..=5 {
        match factorial(n) {
            Ok(result) => println!("   {n}! = {result}"),
            Err(e) => println!("   {n}!: {e}"),
        }
    }

    println!("\nLarger positive integers:");
    for n in [10, 15, 20, 50] {
        match factorial(n) {
            Ok(result) => println!("   {n}! = {result}"),
            Err(e) => println!("   {n}!: {e}"),
        }
    }

    println!("\nNegative input:");
    if let Err(e) = factorial(-5) {
        println!("   (-5)!: {e}");
    }

    println!("\nNon-integer inputs:");
    for value in [json!(3.14), json!("5"), json!([5]), json!(null), json!(true)] {
        match factorial_of(&value) {
            Ok(result) => println!("   factorial({value}) = {result}"),
            Err(e) => println!("   factorial({value}): {e}"),
        }
    }
}
