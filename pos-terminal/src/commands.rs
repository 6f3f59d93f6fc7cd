//! Subcommand handlers

use std::io::Write;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate, Utc};
use pos_client::views::{
    CashierView, DashboardView, ExpenseForm, InventoryView, KitchenView, LoginView, OrderEntryView,
    PurchaseForm, SupplyForm,
};
use pos_client::{ClientConfig, HttpClient};
use shared::money::format_soles;

use crate::cli::{
    CashierArgs, Cli, Command, DashboardArgs, ExpenseArgs, InventoryArgs, KitchenArgs, OrderArgs,
    PurchaseArgs, SupplyArgs,
};
use crate::render;

pub async fn run(cli: Cli, config: ClientConfig) -> anyhow::Result<()> {
    let client = config
        .build_http_client()
        .context("failed to create HTTP client")?;

    let login = LoginView::new(client.clone());
    if let (Some(username), Some(password)) = (&cli.username, &cli.password) {
        let user = login.submit(username, password).await.context("login failed")?;
        tracing::debug!(user = %user.username, "Session opened");
    }

    match cli.command {
        Command::Login => {
            let Some(user) = login.current_user().await else {
                bail!(
                    "no credentials given; use --username/--password or POS_USERNAME/POS_PASSWORD"
                );
            };
            println!("{}", render::user(&user));
        }
        Command::Menu => menu(client).await?,
        Command::Order(args) => order(client, args).await?,
        Command::Kitchen(args) => kitchen(client, &config, args).await?,
        Command::Cashier(args) => cashier(client, &cli.business_name, args).await?,
        Command::Dashboard(args) => dashboard(client, args).await?,
        Command::Expense(args) => expense(client, args).await?,
        Command::Inventory(args) => inventory(client, args).await?,
        Command::Supply(args) => supply(client, args).await?,
        Command::Purchase(args) => purchase(client, args).await?,
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn menu(client: HttpClient) -> anyhow::Result<()> {
    let mut view = OrderEntryView::new(client);
    let items = view.mount().await.context("failed to load menu")?;
    print!("{}", render::menu(items));
    Ok(())
}

async fn order(client: HttpClient, args: OrderArgs) -> anyhow::Result<()> {
    let mut view = OrderEntryView::new(client);
    view.mount().await.context("failed to load menu")?;

    for line in &args.items {
        view.add(&line.menu_item_id, line.quantity)?;
    }
    for (id, text) in &args.notes {
        view.cart_mut().set_notes(id, Some(text))?;
    }
    tracing::debug!(lines = view.cart().len(), total = %view.cart().total(), "Cart ready");

    let order = view.submit().await.context("order was not accepted")?;
    print!("{}", render::order(&order));
    Ok(())
}

async fn kitchen(
    client: HttpClient,
    config: &ClientConfig,
    args: KitchenArgs,
) -> anyhow::Result<()> {
    let mut view = KitchenView::new(client);

    if let Some(order_id) = &args.advance {
        view.refresh().await.context("failed to load kitchen board")?;
        let updated = match args.to {
            Some(to) => {
                let from = view
                    .board()
                    .find(order_id)
                    .map(|o| o.status)
                    .with_context(|| format!("order {order_id} is not on the board"))?;
                view.set_status(order_id, from, to).await?
            }
            None => view.advance(order_id).await?,
        };
        println!("Pedido {} -> {}", updated.short_id(), updated.status);
        print!("{}", render::kitchen_board(view.board(), Utc::now()));
        return Ok(());
    }

    if !args.watch {
        let board = view.refresh().await.context("failed to load kitchen board")?;
        print!("{}", render::kitchen_board(board, Utc::now()));
        return Ok(());
    }

    let period = match args.interval {
        Some(secs) => config.clone().with_kitchen_poll_secs(secs).kitchen_poll_interval(),
        None => config.kitchen_poll_interval(),
    };
    let poller = view.start_polling(period);
    let mut rx = poller.subscribe();
    let mut stdout = std::io::stdout();

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let board = rx.borrow_and_update().clone();
                // Clear screen, cursor home
                print!("\x1B[2J\x1B[H");
                print!("{}", render::kitchen_board(&board, Utc::now()));
                stdout.flush()?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Leaving kitchen board");
                break;
            }
        }
    }

    poller.stop().await;
    Ok(())
}

async fn cashier(client: HttpClient, business_name: &str, args: CashierArgs) -> anyhow::Result<()> {
    let mut view = CashierView::new(client);
    view.mount().await.context("failed to load delivered orders")?;

    let Some(order_id) = &args.pay else {
        print!("{}", render::cashier_orders(view.orders()));
        return Ok(());
    };

    let order = view
        .find(order_id)
        .cloned()
        .with_context(|| format!("order {order_id} is not awaiting payment"))?;
    let payment = view.checkout(order_id, args.method, args.received).await?;

    println!(
        "Cobrado {} ({})",
        format_soles(payment.amount),
        payment.method
    );
    if let Some(change) = payment.change {
        println!("Vuelto {}", format_soles(change));
    }
    if args.receipt {
        println!();
        print!("{}", view.receipt(business_name, &order, &payment));
    }
    Ok(())
}

async fn dashboard(client: HttpClient, args: DashboardArgs) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(today);
    let mut view = DashboardView::new(client, date);
    view.mount().await.context("failed to load daily summary")?;

    if let Some(summary) = view.summary() {
        print!("{}", render::summary(&date.to_string(), summary));
    }
    println!();
    print!("{}", render::expenses(view.expenses()));
    Ok(())
}

async fn expense(client: HttpClient, args: ExpenseArgs) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(today);
    let mut view = DashboardView::new(client, date);
    let form = ExpenseForm {
        description: args.description,
        amount: args.amount,
        category: args.category,
    };
    let created = view.add_expense(&form).await?;
    println!(
        "Gasto registrado: {} {} ({})",
        created.description,
        format_soles(created.amount),
        created.category
    );
    Ok(())
}

async fn inventory(client: HttpClient, args: InventoryArgs) -> anyhow::Result<()> {
    let mut view = InventoryView::new(client);
    view.mount().await.context("failed to load supplies")?;
    if args.low {
        print!("{}", render::supplies(view.low_stock()));
    } else {
        print!("{}", render::supplies(view.supplies()));
    }
    Ok(())
}

async fn supply(client: HttpClient, args: SupplyArgs) -> anyhow::Result<()> {
    let mut view = InventoryView::new(client);
    // Loaded so duplicate names are caught before submitting
    view.mount().await.context("failed to load supplies")?;
    let form = SupplyForm {
        name: args.name,
        unit: args.unit,
        min_stock: args.min_stock,
        current_stock: args.current_stock,
    };
    let created = view.create_supply(&form).await?;
    print!("{}", render::supplies([&created]));
    Ok(())
}

async fn purchase(client: HttpClient, args: PurchaseArgs) -> anyhow::Result<()> {
    let mut view = InventoryView::new(client);
    view.mount().await.context("failed to load supplies")?;
    let form = PurchaseForm {
        supply_id: args.supply_id,
        quantity: args.quantity,
        cost: args.cost,
    };
    let updated = view.register_purchase(&form).await?;
    print!("{}", render::supplies([&updated]));
    Ok(())
}
