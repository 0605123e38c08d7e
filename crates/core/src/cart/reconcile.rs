//! Cart reconciliation
//!
//! Runs when a shopper authenticates and both a locally persisted cart and a
//! server-side cart exist.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cart::{Cart, CartLine, LineKey};

/// Merge a locally persisted cart into the server's copy.
///
/// - An empty local cart yields the server cart verbatim.
/// - Lines present in both keep the server's fields (id, price, name, image,
///   stock ceiling) but take the local quantity when the two differ, clamped
///   to the server's stock ceiling.
/// - Server-only lines are kept as they are, in server order.
/// - Local-only lines are appended in local order.
pub fn reconcile(local: Cart, server: Cart) -> Cart {
    if local.is_empty() {
        return server;
    }

    let local_lines = local.into_lines();

    let local_quantities: FxHashMap<LineKey, u32> = local_lines
        .iter()
        .map(|line| (line.key(), line.quantity))
        .collect();

    let mut lines: Vec<CartLine> = server
        .into_lines()
        .into_iter()
        .map(|mut line| {
            if let Some(&quantity) = local_quantities.get(&line.key()) {
                line.quantity = preferred_quantity(&line, quantity);
            }

            line
        })
        .collect();

    let server_keys: FxHashSet<LineKey> = lines.iter().map(CartLine::key).collect();

    lines.extend(
        local_lines
            .into_iter()
            .filter(|line| !server_keys.contains(&line.key())),
    );

    Cart { lines }
}

/// The local quantity wins, but never past the server's ceiling. An
/// out-of-stock server line keeps its own quantity.
fn preferred_quantity(server: &CartLine, local: u32) -> u32 {
    if local == server.quantity {
        return server.quantity;
    }

    match server.stock {
        Some(0) => server.quantity,
        Some(ceiling) => local.min(ceiling),
        None => local,
    }
}
