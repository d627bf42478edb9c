// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build validated pricing requests
//! 2. Price calls and puts across a strike ladder
//! 3. Check put-call parity on the results
//! 4. See how invalid input is reported

use anyhow::Result;
use bscalc_lib::{
    calculate, default_configs, price_european, FormFields, OptionKind, PricingError,
    PricingRequest,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let spot = 100.0;
    let maturity = 0.5;
    let rate = 0.03;
    let volatility = 0.25;

    println!("Spot: ${:.2}", spot);
    println!("Maturity: {:.2} years", maturity);
    println!("Rate: {:.1}%", rate * 100.0);
    println!("Volatility: {:.1}%", volatility * 100.0);

    println!("\nStep 1: Pricing a strike ladder...");
    println!(
        "{:<8} {:<12} {:<12} {:<12}",
        "Strike", "Call", "Put", "Parity err"
    );
    println!("{}", "-".repeat(48));

    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let call_req = PricingRequest::new(spot, strike, maturity, rate, volatility, OptionKind::Call)?;
        let call = price_european(&call_req)?;
        let put = price_european(&call_req.with_kind(OptionKind::Put))?;

        let parity = spot - strike * (-rate * maturity).exp();
        let parity_err = call.price - put.price - parity;

        println!(
            "{:<8.0} {:<12.4} {:<12.4} {:<12.2e}",
            strike, call.price, put.price, parity_err
        );
    }

    println!("\nStep 2: Form-style calculation...");
    let config = default_configs::standard();
    let forms = [
        FormFields::new("100", "100", "1", "0.05", "0.2", "call"),
        FormFields::new("100", "100", "1", "0.05", "0.2", "put"),
        FormFields::new("100", "abc", "1", "0.05", "0.2", "call"),
        FormFields::new("100", "100", "1", "0.05", "0.2", "straddle"),
        FormFields::new("100", "100", "0", "0.05", "0.2", "call"),
    ];
    for fields in &forms {
        println!("  {}", calculate(fields, &config));
    }

    println!("\nStep 3: Branching on error kinds...");
    match PricingRequest::new(spot, 100.0, maturity, rate, 0.0, OptionKind::Call) {
        Ok(_) => println!("  unexpectedly accepted zero volatility"),
        Err(PricingError::Domain { field, reason, .. }) => {
            println!("  rejected {}: {}", field, reason)
        }
        Err(other) => println!("  rejected: {}", other),
    }

    Ok(())
}
