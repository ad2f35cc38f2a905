// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use string_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== String Calculator Example ===\n");

    // Default policies: reject negatives, zero-fill values above 1000
    let calculator = Calculator::new(CalculatorConfig::default(), Arc::new(LoggingEventHandler));

    let inputs = [
        "1,2",
        "1\n2,3",
        "0.1,0.2",
        "1000000,2000000,3\n4",
        "//;\n1;2",
        "//[*][!!][r9r]\n11r9r22*hh*33!!44",
        "abc,5",
        "-1,-2",
        "//[***\n1***2",
    ];

    for input in inputs {
        match calculator.add(input) {
            Ok(calculation) => println!("  {:<40} -> {}", format!("{input:?}"), calculation),
            Err(err) => println!("  {:<40} -> error: {}", format!("{input:?}"), err),
        }
    }

    // Builder with relaxed policies
    println!("\n=== Lenient Calculator ===");
    let lenient = CalculatorBuilder::new()
        .allow_negatives()
        .max_value(Decimal::from(100))
        .oversize_policy(OversizePolicy::Drop)
        .build(Arc::new(NoOpEventHandler));

    let lenient = match lenient {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    for input in ["-5,500,7", "//|\n1|2|300"] {
        match lenient.add(input) {
            Ok(calculation) => {
                println!("  {:<40} -> {}", format!("{input:?}"), calculation);
                for term in &calculation.terms {
                    println!("      {} (counted: {})", term.value(), term.is_counted());
                }
            }
            Err(err) => println!("  {:<40} -> error: {}", format!("{input:?}"), err),
        }
    }
}
