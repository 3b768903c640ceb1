use crate::adapters::{flat_file_reader, is_blank, line_of};
use crate::domain::model::Order;
use crate::utils::error::Result;

/// Parse `CustomerName,CakeType,Quantity` lines into orders, keeping file order.
///
/// Blank lines are ignored. Lines without exactly three fields, or whose quantity is
/// not a positive integer, are logged and skipped. Data that is not valid UTF-8
/// fails the whole load.
pub fn parse_orders(data: &[u8]) -> Result<Vec<Order>> {
    let mut orders = Vec::new();

    for result in flat_file_reader(data).records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = line_of(&record);

        if record.len() != 3 {
            tracing::warn!("Skipping malformed line {}: {}", line, record.iter().collect::<Vec<_>>().join(","));
            continue;
        }

        match record[2].parse::<i64>() {
            Ok(quantity) if quantity > 0 => {
                orders.push(Order::new(&record[0], &record[1], quantity as u64));
            }
            Ok(quantity) => {
                tracing::warn!("Skipping order on line {}: quantity {} is not positive", line, quantity);
            }
            Err(_) => {
                tracing::warn!("Invalid quantity in line {}: '{}'", line, &record[2]);
            }
        }
    }

    tracing::info!("Loaded {} orders", orders.len());
    Ok(orders)
}
