use super::AppConfig;
use crate::model::{initial_products, initial_stocks, Stock};
use crate::pages::StockPage;
use crate::pos::PosScreen;
use crate::views::NavBar;
use std::fmt::Display;
use store_framework::Subscription;
use tracing::{debug, info};

/// Which screen the console is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Stock,
    Pos,
}

/// The whole application: navigation bar, stock page and POS screen.
///
/// `App` is responsible for:
/// - **Wiring**: building each screen from [`AppConfig`]
/// - **Routing**: remembering which screen receives commands
/// - **Change tracking**: following the stock store through a [`Subscription`]
pub struct App {
    pub nav: NavBar,
    pub stock_page: StockPage,
    pub pos: PosScreen,
    active: ActiveScreen,
    stock_changes: Subscription<Vec<Stock>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (stocks, products) = if config.seed_demo_data {
            (initial_stocks(), initial_products())
        } else {
            (Vec::new(), Vec::new())
        };
        info!(
            stocks = stocks.len(),
            products = products.len(),
            tax_percent = config.tax_percent,
            "Starting application"
        );

        let stock_page = StockPage::new(stocks);
        let stock_changes = stock_page.subscribe();
        Self {
            nav: NavBar::default(),
            stock_page,
            pos: PosScreen::new(products, config.tax_percent),
            active: ActiveScreen::Stock,
            stock_changes,
        }
    }

    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    pub fn show(&mut self, screen: ActiveScreen) {
        debug!(?screen, "Switching screen");
        self.active = screen;
    }

    /// The stock list, if it changed since the last call.
    pub fn take_stock_change(&mut self) -> Option<Vec<Stock>> {
        let stocks = self.stock_changes.take_change()?;
        info!(count = stocks.len(), "Stock list changed");
        Some(stocks)
    }
}

impl Display for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.nav)?;
        writeln!(f)?;
        match self.active {
            ActiveScreen::Stock => write!(f, "{}", self.stock_page),
            ActiveScreen::Pos => write!(f, "{}", self.pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::AutoAnswer;

    #[test]
    fn empty_config_starts_without_records() {
        let app = App::new(&AppConfig {
            tax_percent: 10,
            seed_demo_data: false,
        });
        assert!(app.stock_page.stocks().is_empty());
        assert!(app.pos.catalog().products().is_empty());
        assert!(app.to_string().contains("No stocks found."));
    }

    #[test]
    fn stock_changes_are_seen_once() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(app.take_stock_change(), None);

        let first = app.stock_page.stocks()[0].clone();
        app.stock_page
            .request_delete(&first, &AutoAnswer(true))
            .unwrap();
        assert_eq!(app.take_stock_change().map(|s| s.len()), Some(4));
        assert_eq!(app.take_stock_change(), None);
    }

    #[test]
    fn renders_the_active_screen() {
        let mut app = App::new(&AppConfig::default());
        assert!(app.to_string().contains("Stock Management"));
        app.show(ActiveScreen::Pos);
        assert!(app.to_string().contains("POS System"));
    }
}
