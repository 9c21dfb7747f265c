//! Scripted walkthrough of the paper-trading core.
//!
//! Drives the ledger directly, without the HTTP service: open a position,
//! average up, trip each rejection, and sell back out.

use ledger::{portfolio_snapshot, InstrumentTable, Ledger, OrderKind, OrderRequest, Side};

fn main() {
    let instruments = InstrumentTable::nepse();
    let mut ledger = Ledger::default();

    println!("=== NEPSE Paper Trading Demo ===");
    println!("Starting cash: {:.2}\n", ledger.cash());

    submit(&mut ledger, &instruments, "NABIL", Side::Buy, 10.0);
    submit(&mut ledger, &instruments, "NABIL", Side::Sell, 15.0); // oversell
    submit(&mut ledger, &instruments, "NABIL", Side::Buy, 10.0);
    submit(&mut ledger, &instruments, "HDL", Side::Buy, 1_000_000_000.0); // too big
    submit(&mut ledger, &instruments, "ZZZZ", Side::Buy, 5.0); // not listed
    submit(&mut ledger, &instruments, "NABIL", Side::Sell, 20.0);

    let portfolio = portfolio_snapshot(&ledger, &instruments);
    println!("\nFinal cash: {:.2}", portfolio.cash);
    println!("Open positions: {}", portfolio.positions.len());
    println!("Orders retained: {}", portfolio.orders.len());
}

fn submit(
    ledger: &mut Ledger,
    instruments: &InstrumentTable,
    symbol: &str,
    side: Side,
    qty: f64,
) {
    let request = OrderRequest {
        symbol: symbol.to_string(),
        side,
        qty,
        kind: OrderKind::Market,
        limit_price: None,
    };

    match ledger.execute(&request, instruments) {
        Ok(order) => println!(
            "filled   #{} {:?} {} x{} @ {:.2}",
            order.id, order.side, order.symbol, order.qty, order.price
        ),
        Err(reason) => println!("rejected {:?} {} x{}: {}", side, symbol, qty, reason),
    }
}
