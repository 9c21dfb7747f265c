use clap::{Parser, Subcommand};
use ledger::{OrderKind, OrderRequest, Side};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "papertrade-cli")]
#[command(about = "Paper Trading CLI - Command line client for the sandbox")]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the market snapshot table
    Market,
    /// Print cash, positions, and recent orders
    Portfolio,
    /// Place a simulated order
    Submit {
        #[arg(short = 's', long)]
        symbol: String,
        #[arg(long, value_parser = parse_side)]
        side: Side,
        #[arg(short = 'q', long)]
        qty: f64,
        #[arg(short = 't', long, value_parser = parse_kind, default_value = "market")]
        r#type: OrderKind,
        #[arg(short = 'l', long)]
        limit_price: Option<f64>,
    },
    Health,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketSnapshot {
    market: String,
    currency: String,
    session: String,
    as_of: String,
    instruments: Vec<Quote>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    symbol: String,
    name: String,
    last: f64,
    change: f64,
    change_pct: f64,
    volume: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioSnapshot {
    cash: f64,
    orders: Vec<OrderRow>,
    positions: Vec<PositionRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRow {
    id: u64,
    symbol: String,
    side: String,
    #[serde(rename = "type")]
    kind: String,
    qty: f64,
    price: f64,
    status: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRow {
    symbol: String,
    qty: f64,
    avg_price: f64,
    market_price: f64,
    market_value: f64,
    unrealized_pnl: f64,
}

#[derive(Deserialize)]
struct OrderResult {
    message: String,
    order: Option<OrderRow>,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_lowercase().as_str() {
        "buy" | "b" => Ok(Side::Buy),
        "sell" | "s" => Ok(Side::Sell),
        _ => Err(format!("Invalid side: {}. Use 'buy' or 'sell'", s)),
    }
}

fn parse_kind(s: &str) -> Result<OrderKind, String> {
    match s.to_lowercase().as_str() {
        "market" | "m" => Ok(OrderKind::Market),
        "limit" | "l" => Ok(OrderKind::Limit),
        _ => Err(format!("Invalid order type: {}. Use 'market' or 'limit'", s)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Market => {
            let response = client.get(format!("{}/market", cli.server)).send().await?;

            if response.status().is_success() {
                let snapshot: MarketSnapshot = response.json().await?;
                println!(
                    "{} ({}) - {} session, as of {}",
                    snapshot.market, snapshot.currency, snapshot.session, snapshot.as_of
                );
                println!("{:<8} {:<32} {:>10} {:>8} {:>8} {:>10}", "Symbol", "Name", "Last", "Chg", "Chg%", "Volume");
                for quote in snapshot.instruments {
                    println!(
                        "{:<8} {:<32} {:>10.2} {:>8.2} {:>7.2}% {:>10}",
                        quote.symbol, quote.name, quote.last, quote.change, quote.change_pct, quote.volume
                    );
                }
            } else {
                println!("Error: {}", response.status());
            }
        }

        Commands::Portfolio => {
            let response = client.get(format!("{}/portfolio", cli.server)).send().await?;

            if response.status().is_success() {
                let snapshot: PortfolioSnapshot = response.json().await?;
                let position_value: f64 = snapshot.positions.iter().map(|p| p.market_value).sum();

                println!("Cash: {:.2}", snapshot.cash);
                println!("Equity: {:.2}", snapshot.cash + position_value);

                println!("\nPositions:");
                if snapshot.positions.is_empty() {
                    println!("  (none)");
                }
                for position in snapshot.positions {
                    println!(
                        "  {:<8} qty={:<8} avg={:<10.2} mkt={:<10.2} value={:<12.2} pnl={:.2}",
                        position.symbol,
                        position.qty,
                        position.avg_price,
                        position.market_price,
                        position.market_value,
                        position.unrealized_pnl
                    );
                }

                println!("\nRecent orders:");
                if snapshot.orders.is_empty() {
                    println!("  (none)");
                }
                for order in snapshot.orders {
                    println!(
                        "  #{:<4} {:<6} {:<5} {:<7} qty={:<8} @ {:<10.2} {}",
                        order.id, order.symbol, order.side, order.kind, order.qty, order.price, order.status
                    );
                }
            } else {
                println!("Error: {}", response.status());
            }
        }

        Commands::Submit { symbol, side, qty, r#type, limit_price } => {
            let request = OrderRequest {
                symbol,
                side,
                qty,
                kind: r#type,
                limit_price,
            };

            let response = client
                .post(format!("{}/orders", cli.server))
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            let result: OrderResult = response.json().await?;
            println!("{}", result.message);

            if let Some(order) = result.order {
                println!(
                    "  #{} {} {} qty={} @ {:.2} ({})",
                    order.id, order.side, order.symbol, order.qty, order.price, order.status
                );
            } else if !status.is_success() {
                std::process::exit(1);
            }
        }

        Commands::Health => {
            let response = client.get(format!("{}/health", cli.server)).send().await?;

            if response.status().is_success() {
                let health: serde_json::Value = response.json().await?;
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("Error: {}", response.status());
            }
        }
    }

    Ok(())
}
