// pos-client/tests/common/mod.rs
// In-process fake backend for the view tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use pos_client::{ClientConfig, HttpClient};
use serde_json::json;
use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::{
    DailySummary, Decimal, Expense, MenuItem, NewExpense, NewOrder, NewSupply, Order, OrderStatus,
    Payment, PaymentBreakdown, PaymentMethod, StatusUpdate, Supply, SupplyPurchase,
};

pub const TOKEN: &str = "token-cajero1";
pub const PASSWORD: &str = "secret";

#[derive(Default)]
pub struct Store {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub supplies: Vec<Supply>,
    pub next_id: u64,
    /// Authorization headers seen, in request order
    pub auth_headers: Vec<Option<String>>,
    /// Count of GET /orders calls
    pub order_list_calls: usize,
    /// Return every order regardless of the status query
    pub ignore_status_filter: bool,
    /// Answer GET /orders with 500
    pub fail_order_list: bool,
    /// Answer the finance and supply listings with 500
    pub fail_reads: bool,
    /// Answer POST /orders with 400
    pub reject_orders: bool,
}

impl Store {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn record_auth(&mut self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.push(value);
    }
}

pub type Shared = Arc<Mutex<Store>>;

pub struct FakeBackend {
    pub store: Shared,
    pub addr: SocketAddr,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store: Shared = Arc::new(Mutex::new(Store {
            menu: vec![
                MenuItem::new("1", "Ceviche", Decimal::new(28, 0)),
                MenuItem::new("2", "Chicha morada", Decimal::new(650, 2)),
                MenuItem::new("3", "Lomo saltado", Decimal::new(3200, 2)),
            ],
            supplies: vec![
                Supply {
                    id: "s1".into(),
                    name: "Limón".into(),
                    unit: "kg".into(),
                    min_stock: Decimal::new(5, 0),
                    current_stock: Decimal::new(2, 0),
                },
                Supply {
                    id: "s2".into(),
                    name: "Pescado".into(),
                    unit: "kg".into(),
                    min_stock: Decimal::new(3, 0),
                    current_stock: Decimal::new(10, 0),
                },
            ],
            next_id: 100,
            ..Default::default()
        }));

        let api = Router::new()
            .route("/auth/login", post(login))
            .route("/menu", get(list_menu))
            .route("/orders", get(list_orders).post(create_order))
            .route("/orders/{id}/status", patch(update_status))
            .route("/payments", post(create_payment))
            .route("/finance/summary", get(summary))
            .route("/finance/expenses", get(list_expenses).post(create_expense))
            .route("/inventory/supplies", get(list_supplies).post(create_supply))
            .route("/inventory/purchases", post(register_purchase))
            .with_state(store.clone());
        let app = Router::new().nest("/api", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { store, addr }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(format!("http://{}/api", self.addr)).with_timeout(5)
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::new(&self.config()).unwrap()
    }

    pub fn store(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    /// Insert an order directly, bypassing the API
    pub fn seed_order(&self, status: OrderStatus, lines: &[(&str, u32)]) -> Order {
        let mut store = self.store();
        let items = lines
            .iter()
            .map(|(id, qty)| {
                let item = store.menu.iter().find(|m| m.id == *id).unwrap().clone();
                shared::OrderItem {
                    menu_item_id: item.id,
                    menu_item_name: item.name,
                    price: item.price,
                    quantity: *qty,
                    notes: None,
                }
            })
            .collect();
        let order = Order {
            id: store.next_id(),
            items,
            status,
            timestamp: Utc::now(),
            paid: false,
        };
        store.orders.push(order.clone());
        order
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn login(State(store): State<Shared>, Json(req): Json<LoginRequest>) -> Response {
    store.lock().unwrap().auth_headers.push(None);
    if req.password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Credenciales inválidas" })),
        )
            .into_response();
    }
    Json(LoginResponse {
        token: TOKEN.to_string(),
        user: UserInfo {
            id: "u1".to_string(),
            username: req.username,
            role: "admin".to_string(),
        },
    })
    .into_response()
}

async fn list_menu(State(store): State<Shared>, headers: HeaderMap) -> Json<Vec<MenuItem>> {
    let mut store = store.lock().unwrap();
    store.record_auth(&headers);
    Json(store.menu.clone())
}

async fn list_orders(
    State(store): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.record_auth(&headers);
    store.order_list_calls += 1;
    if store.fail_order_list {
        return reject(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let status = query.get("status").and_then(|s| s.parse::<OrderStatus>().ok());
    let orders: Vec<Order> = store
        .orders
        .iter()
        .filter(|o| store.ignore_status_filter || status.is_none_or(|s| o.status == s))
        .cloned()
        .collect();
    Json(orders).into_response()
}

async fn create_order(
    State(store): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<NewOrder>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.record_auth(&headers);
    if req.items.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "Pedido vacío");
    }
    if store.reject_orders {
        return reject(StatusCode::BAD_REQUEST, "Stock insuficiente");
    }
    let order = Order {
        id: store.next_id(),
        items: req.items,
        status: OrderStatus::Pendiente,
        timestamp: Utc::now(),
        paid: false,
    };
    store.orders.push(order.clone());
    (StatusCode::CREATED, Json(order)).into_response()
}

async fn update_status(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.record_auth(&headers);
    match store.orders.iter_mut().find(|o| o.id == id) {
        Some(order) => {
            order.status = req.status;
            Json(order.clone()).into_response()
        }
        None => reject(StatusCode::NOT_FOUND, "Pedido no encontrado"),
    }
}

async fn create_payment(
    State(store): State<Shared>,
    headers: HeaderMap,
    Json(payment): Json<Payment>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.record_auth(&headers);
    let Some(order) = store.orders.iter_mut().find(|o| o.id == payment.order_id) else {
        return reject(StatusCode::NOT_FOUND, "Pedido no encontrado");
    };
    if order.paid {
        return reject(StatusCode::CONFLICT, "Pedido ya pagado");
    }
    order.paid = true;
    store.payments.push(payment.clone());
    (StatusCode::CREATED, Json(payment)).into_response()
}

fn date_param(query: &HashMap<String, String>) -> Option<NaiveDate> {
    query
        .get("date")
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

async fn summary(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let store = store.lock().unwrap();
    if store.fail_reads {
        return reject(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let Some(date) = date_param(&query) else {
        return reject(StatusCode::BAD_REQUEST, "Fecha inválida");
    };
    let mut breakdown = PaymentBreakdown::default();
    for p in &store.payments {
        match p.method {
            PaymentMethod::Cash => breakdown.cash += p.amount,
            PaymentMethod::Yape => breakdown.yape += p.amount,
        }
    }
    let total_expenses: Decimal = store
        .expenses
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.amount)
        .sum();
    let total_sales = breakdown.total();
    Json(DailySummary {
        total_sales,
        total_expenses,
        net_income: total_sales - total_expenses,
        breakdown,
    })
    .into_response()
}

async fn list_expenses(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let store = store.lock().unwrap();
    if store.fail_reads {
        return reject(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let date = date_param(&query);
    let expenses: Vec<Expense> = store
        .expenses
        .iter()
        .filter(|e| date.is_none_or(|d| e.date == d))
        .cloned()
        .collect();
    Json(expenses).into_response()
}

async fn create_expense(State(store): State<Shared>, Json(req): Json<NewExpense>) -> Response {
    let mut store = store.lock().unwrap();
    let expense = Expense {
        id: store.next_id(),
        description: req.description,
        amount: req.amount,
        category: req.category,
        date: req.date,
    };
    store.expenses.push(expense.clone());
    (StatusCode::CREATED, Json(expense)).into_response()
}

async fn list_supplies(State(store): State<Shared>) -> Response {
    let store = store.lock().unwrap();
    if store.fail_reads {
        return reject(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    Json(store.supplies.clone()).into_response()
}

async fn create_supply(State(store): State<Shared>, Json(req): Json<NewSupply>) -> Response {
    let mut store = store.lock().unwrap();
    let supply = Supply {
        id: store.next_id(),
        name: req.name,
        unit: req.unit,
        min_stock: req.min_stock,
        current_stock: req.current_stock,
    };
    store.supplies.push(supply.clone());
    (StatusCode::CREATED, Json(supply)).into_response()
}

async fn register_purchase(
    State(store): State<Shared>,
    Json(req): Json<SupplyPurchase>,
) -> Response {
    let mut store = store.lock().unwrap();
    match store.supplies.iter_mut().find(|s| s.id == req.supply_id) {
        Some(supply) => {
            supply.current_stock += req.quantity;
            Json(supply.clone()).into_response()
        }
        None => reject(StatusCode::NOT_FOUND, "Insumo no encontrado"),
    }
}
