//! Text rendering of the views

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use pos_client::KitchenSnapshot;
use shared::money::format_soles;
use shared::client::UserInfo;
use shared::{DailySummary, Expense, MenuItem, Order, PaymentMethod, Supply};

fn elapsed_minutes(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_minutes().max(0)
}

pub fn user(user: &UserInfo) -> String {
    format!("{} ({})", user.username, user.role)
}

pub fn menu(items: &[MenuItem]) -> String {
    let mut out = String::new();
    for item in items {
        let flag = if item.available { "" } else { "  [agotado]" };
        let _ = writeln!(
            out,
            "{:>6}  {:<32} {:>10}{flag}",
            item.id,
            item.name,
            format_soles(item.price)
        );
    }
    if items.is_empty() {
        out.push_str("(menú vacío)\n");
    }
    out
}

/// Order lines with subtotals and the total
pub fn order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Pedido {}  [{}]  {}",
        order.short_id(),
        order.status,
        order.timestamp.with_timezone(&Local).format("%H:%M")
    );
    for item in &order.items {
        let _ = writeln!(
            out,
            "  {:>3} x {:<28} {:>10}",
            item.quantity,
            item.menu_item_name,
            format_soles(item.subtotal())
        );
        if let Some(notes) = &item.notes {
            let _ = writeln!(out, "        ({notes})");
        }
    }
    let _ = writeln!(out, "  {:<34} {:>10}", "TOTAL", format_soles(order.total()));
    out
}

fn board_column(out: &mut String, title: &str, orders: &[Order], now: DateTime<Utc>) {
    let _ = writeln!(out, "== {title} ({}) ==", orders.len());
    for o in orders {
        let _ = writeln!(
            out,
            "#{}  {} platos  hace {} min  {}",
            o.short_id(),
            o.item_count(),
            elapsed_minutes(o.timestamp, now),
            o.status.action_label().unwrap_or("")
        );
        for item in &o.items {
            let _ = writeln!(out, "   {} x {}", item.quantity, item.menu_item_name);
            if let Some(notes) = &item.notes {
                let _ = writeln!(out, "      ({notes})");
            }
        }
    }
}

pub fn kitchen_board(board: &KitchenSnapshot, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    board_column(&mut out, "PENDIENTE", &board.pending, now);
    out.push('\n');
    board_column(&mut out, "LISTO", &board.ready, now);
    if let Some(at) = board.fetched_at {
        let _ = writeln!(
            out,
            "\nactualizado {}",
            at.with_timezone(&Local).format("%H:%M:%S")
        );
    }
    out
}

pub fn cashier_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "(no hay pedidos por cobrar)\n".to_string();
    }
    let mut out = String::new();
    for o in orders {
        out.push_str(&order(o));
        out.push('\n');
    }
    out
}

pub fn summary(date: &str, summary: &DailySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cierre del {date}");
    let _ = writeln!(out, "  {:<18} {:>12}", "Ventas", format_soles(summary.total_sales));
    for method in [PaymentMethod::Cash, PaymentMethod::Yape] {
        let amount = summary.breakdown.get(method);
        let _ = writeln!(out, "    {:<16} {:>12}", method.to_string(), format_soles(amount));
    }
    let _ = writeln!(out, "  {:<18} {:>12}", "Gastos", format_soles(summary.total_expenses));
    let _ = writeln!(out, "  {:<18} {:>12}", "Ingreso neto", format_soles(summary.net_income));
    if !summary.is_balanced() {
        let _ = writeln!(out, "  ! ingreso neto no cuadra con ventas - gastos");
    }
    if !summary.breakdown_matches_sales() {
        let _ = writeln!(out, "  ! efectivo + yape no cuadra con ventas");
    }
    out
}

pub fn expenses(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "(sin gastos)\n".to_string();
    }
    let mut out = String::new();
    for e in expenses {
        let _ = writeln!(
            out,
            "{:<12} {:<30} {:>12}",
            e.category,
            e.description,
            format_soles(e.amount)
        );
    }
    let total = shared::models::expense::total_expenses(expenses);
    let _ = writeln!(out, "{:<43} {:>12}", "TOTAL", format_soles(total));
    out
}

pub fn supplies<'a>(supplies: impl IntoIterator<Item = &'a Supply>) -> String {
    let mut out = String::new();
    for s in supplies {
        let flag = if s.is_low() {
            format!("  BAJO (faltan {})", s.shortfall())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:>6}  {:<24} {:>8} {:<4} (min {}){flag}",
            s.id, s.name, s.current_stock, s.unit, s.min_stock
        );
    }
    if out.is_empty() {
        out.push_str("(sin insumos)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::{Decimal, OrderItem, OrderStatus, PaymentBreakdown};

    fn sample_order(status: OrderStatus, at: DateTime<Utc>) -> Order {
        Order {
            id: "abc123".into(),
            items: vec![OrderItem {
                menu_item_id: "1".into(),
                menu_item_name: "Ceviche".into(),
                price: Decimal::new(28, 0),
                quantity: 2,
                notes: Some("sin ají".into()),
            }],
            status,
            timestamp: at,
            paid: false,
        }
    }

    #[test]
    fn test_menu_marks_unavailable() {
        let mut item = MenuItem::new("7", "Causa", Decimal::new(15, 0));
        item.available = false;
        let text = menu(&[item]);
        assert!(text.contains("Causa"));
        assert!(text.contains("S/ 15.00"));
        assert!(text.contains("[agotado]"));
        assert_eq!(menu(&[]), "(menú vacío)\n");
    }

    #[test]
    fn test_order_shows_subtotals_and_total() {
        let text = order(&sample_order(OrderStatus::Entregado, Utc::now()));
        assert!(text.contains("[Entregado]"));
        assert!(text.contains("2 x Ceviche"));
        assert!(text.contains("(sin ají)"));
        assert_eq!(text.matches("S/ 56.00").count(), 2);
    }

    #[test]
    fn test_kitchen_board_columns_and_elapsed_time() {
        let now = Utc::now();
        let board = KitchenSnapshot {
            pending: vec![sample_order(OrderStatus::Pendiente, now - Duration::minutes(12))],
            ready: vec![],
            fetched_at: Some(now),
            revision: 1,
        };
        let text = kitchen_board(&board, now);
        assert!(text.contains("== PENDIENTE (1) =="));
        assert!(text.contains("== LISTO (0) =="));
        assert!(text.contains("2 platos"));
        assert!(text.contains("hace 12 min"));
        assert!(text.contains("Marcar listo"));
    }

    #[test]
    fn test_summary_flags_unbalanced_close() {
        let mut s = DailySummary {
            total_sales: Decimal::new(100, 0),
            total_expenses: Decimal::new(40, 0),
            net_income: Decimal::new(60, 0),
            breakdown: PaymentBreakdown {
                cash: Decimal::new(70, 0),
                yape: Decimal::new(30, 0),
            },
        };
        let text = summary("2026-10-19", &s);
        assert!(text.contains("S/ 60.00"));
        assert!(text.contains("S/ 70.00"));
        assert!(!text.contains("no cuadra"));

        s.net_income = Decimal::new(70, 0);
        assert!(summary("2026-10-19", &s).contains("ingreso neto no cuadra"));

        s.net_income = Decimal::new(60, 0);
        s.breakdown.yape = Decimal::new(20, 0);
        let text = summary("2026-10-19", &s);
        assert!(text.contains("efectivo + yape no cuadra"));
        assert!(!text.contains("ingreso neto no cuadra"));
    }

    #[test]
    fn test_supplies_flags_low_stock() {
        let s = Supply {
            id: "s1".into(),
            name: "Limón".into(),
            unit: "kg".into(),
            min_stock: Decimal::new(5, 0),
            current_stock: Decimal::new(5, 0),
        };
        assert!(supplies([&s]).contains("BAJO (faltan 0)"));
        assert_eq!(supplies(std::iter::empty::<&Supply>()), "(sin insumos)\n");
    }
}
