//! Boleta (sales receipt) rendering
//!
//! Plain-text receipt for the cashier view, laid out for an 80mm printer
//! (48 columns) or a terminal.

use chrono::{DateTime, Local, Utc};
use shared::money::format_soles;
use shared::{Order, Payment};

/// Column count of an 80mm receipt printer
pub const RECEIPT_WIDTH: usize = 48;

/// Minimal line builder
struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    fn text_center(&mut self, s: &str) {
        let w = s.chars().count();
        let pad = self.width.saturating_sub(w) / 2;
        self.write_line(&format!("{}{}", " ".repeat(pad), s));
    }

    fn dash_sep(&mut self) {
        let sep = "-".repeat(self.width);
        self.write_line(&sep);
    }

    fn line_lr(&mut self, left: &str, right: &str) {
        let lw = left.chars().count();
        let rw = right.chars().count();
        if lw + rw >= self.width {
            self.write_line(&format!("{left} {right}"));
        } else {
            let spaces = self.width - lw - rw;
            self.write_line(&format!("{left}{}{right}", " ".repeat(spaces)));
        }
    }

    fn finalize(self) -> String {
        self.buf
    }
}

/// Renders a boleta for a settled order
pub struct ReceiptRenderer<'a> {
    business_name: &'a str,
    order: &'a Order,
    payment: &'a Payment,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(business_name: &'a str, order: &'a Order, payment: &'a Payment) -> Self {
        Self {
            business_name,
            order,
            payment,
            width: RECEIPT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(24);
        self
    }

    pub fn render(&self, printed_at: DateTime<Utc>) -> String {
        let mut b = TextBuilder::new(self.width);

        b.text_center(self.business_name);
        b.text_center("BOLETA DE VENTA");
        b.dash_sep();

        let local = printed_at.with_timezone(&Local);
        b.line_lr(
            &format!("Pedido: {}", self.order.short_id()),
            &local.format("%d/%m/%Y %H:%M").to_string(),
        );
        b.dash_sep();

        for item in &self.order.items {
            let left = format!("{} x {}", item.quantity, item.menu_item_name);
            b.line_lr(&left, &format_soles(item.subtotal()));
            if let Some(notes) = &item.notes {
                b.write_line(&format!("   ({notes})"));
            }
        }

        b.dash_sep();
        b.line_lr("TOTAL", &format_soles(self.payment.amount));
        b.line_lr("Pago", &self.payment.method.to_string());
        if let Some(received) = self.payment.received {
            b.line_lr("Recibido", &format_soles(received));
        }
        if let Some(change) = self.payment.change {
            b.line_lr("Vuelto", &format_soles(change));
        }
        b.dash_sep();
        b.text_center("Gracias por su preferencia");

        b.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Decimal, OrderItem, OrderStatus};

    fn order() -> Order {
        Order {
            id: "000123".to_string(),
            items: vec![
                OrderItem {
                    menu_item_id: "1".into(),
                    menu_item_name: "Ceviche".into(),
                    price: Decimal::new(28, 0),
                    quantity: 2,
                    notes: Some("poco picante".into()),
                },
                OrderItem {
                    menu_item_id: "2".into(),
                    menu_item_name: "Inca Kola".into(),
                    price: Decimal::new(5, 0),
                    quantity: 1,
                    notes: None,
                },
            ],
            status: OrderStatus::Entregado,
            timestamp: Utc::now(),
            paid: false,
        }
    }

    #[test]
    fn test_cash_receipt_lists_lines_total_and_change() {
        let order = order();
        let payment = Payment::cash(&order.id, order.total(), Decimal::new(70, 0)).unwrap();
        let text =
            ReceiptRenderer::new("Picantería Doña Rosa", &order, &payment).render(Utc::now());

        assert!(text.contains("BOLETA DE VENTA"));
        assert!(text.contains("Pedido: 000123"));
        assert!(text.contains("2 x Ceviche"));
        assert!(text.contains("S/ 56.00"));
        assert!(text.contains("(poco picante)"));
        assert!(text.contains("S/ 61.00"));
        assert!(text.contains("Vuelto"));
        assert!(text.contains("S/ 9.00"));
        assert!(text.lines().all(|l| l.chars().count() <= RECEIPT_WIDTH));
    }

    #[test]
    fn test_yape_receipt_has_no_change_line() {
        let order = order();
        let payment = Payment::yape(&order.id, order.total());
        let text = ReceiptRenderer::new("Doña Rosa", &order, &payment).render(Utc::now());
        assert!(text.contains("Yape"));
        assert!(!text.contains("Vuelto"));
        assert!(!text.contains("Recibido"));
    }

    #[test]
    fn test_lines_are_right_aligned_to_width() {
        let order = order();
        let payment = Payment::yape(&order.id, order.total());
        let text = ReceiptRenderer::new("X", &order, &payment)
            .with_width(32)
            .render(Utc::now());
        let total_line = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
        assert_eq!(total_line.chars().count(), 32);
        assert!(total_line.ends_with("S/ 61.00"));
    }
}
