use crate::core::{CheckoutOutcome, OrderSession};
use crate::domain::{MenuCatalog, Money};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::parse_integer;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Main-menu actions, keyed by the token the operator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OrderCoffee,
    ViewCart,
    Checkout,
    Exit,
}

impl Action {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Action::OrderCoffee),
            "2" => Some(Action::ViewCart),
            "3" => Some(Action::Checkout),
            "4" => Some(Action::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingAction,
    AwaitingSelection,
    AwaitingQuantity { selection: i64 },
    Terminated,
}

/// What happened over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub orders: usize,
    pub revenue: Money,
}

/// Blocking prompt/response cycle between an operator and an [`OrderSession`].
///
/// Reads one line per turn from `input` and writes the transcript to
/// `output`. Malformed or out-of-range input is reported and the operator is
/// sent back to the main menu; only I/O failures end the loop early.
pub struct InteractionLoop<'a, C: MenuCatalog + ?Sized, R, W> {
    session: OrderSession<'a, C>,
    input: R,
    output: W,
    state: LoopState,
    summary: SessionSummary,
}

impl<'a, C, R, W> InteractionLoop<'a, C, R, W>
where
    C: MenuCatalog + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(session: OrderSession<'a, C>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            state: LoopState::AwaitingAction,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &OrderSession<'a, C> {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the banner, asks for a name unless one is given, then runs the
    /// main loop. Returns early with an empty summary if input ends before a
    /// name is entered.
    pub fn start(&mut self, shop_name: &str, customer: Option<String>) -> Result<SessionSummary> {
        writeln!(self.output, "Welcome to {}!", shop_name)?;
        let customer = match customer {
            Some(name) => name,
            None => match self.prompt("Enter your name: ")? {
                Some(name) => name,
                None => {
                    writeln!(self.output)?;
                    self.state = LoopState::Terminated;
                    return Ok(self.summary);
                }
            },
        };
        self.run(&customer)
    }

    /// Drives the loop until the exit action or end of input.
    pub fn run(&mut self, customer: &str) -> Result<SessionSummary> {
        tracing::info!(customer, items = self.session.catalog().len(), "Session started");
        while self.state != LoopState::Terminated {
            self.step(customer)?;
        }
        tracing::info!(
            customer,
            orders = self.summary.orders,
            revenue = %self.summary.revenue,
            "Session ended"
        );
        Ok(self.summary)
    }

    /// Handles exactly one line of input for the current state.
    pub fn step(&mut self, customer: &str) -> Result<()> {
        self.state = match self.state {
            LoopState::AwaitingAction => self.await_action(customer)?,
            LoopState::AwaitingSelection => self.await_selection(customer)?,
            LoopState::AwaitingQuantity { selection } => self.await_quantity(customer, selection)?,
            LoopState::Terminated => LoopState::Terminated,
        };
        Ok(())
    }

    fn await_action(&mut self, customer: &str) -> Result<LoopState> {
        writeln!(self.output)?;
        writeln!(self.output, "===== MENU =====")?;
        writeln!(self.output, "1. Order Coffee")?;
        writeln!(self.output, "2. View Cart")?;
        writeln!(self.output, "3. Check Out")?;
        writeln!(self.output, "4. Exit")?;

        let Some(line) = self.prompt("Enter choice: ")? else {
            return self.end_of_input(customer);
        };

        match Action::from_token(&line) {
            Some(Action::OrderCoffee) => {
                self.write_menu()?;
                Ok(LoopState::AwaitingSelection)
            }
            Some(Action::ViewCart) => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.session.view_cart())?;
                Ok(LoopState::AwaitingAction)
            }
            Some(Action::Checkout) => {
                let outcome = self.session.checkout(customer);
                if let CheckoutOutcome::Completed(receipt) = &outcome {
                    writeln!(self.output)?;
                    self.record_order(receipt.grand_total);
                }
                writeln!(self.output, "{}", outcome)?;
                Ok(LoopState::AwaitingAction)
            }
            Some(Action::Exit) => {
                writeln!(self.output, "Goodbye, {}!", customer)?;
                Ok(LoopState::Terminated)
            }
            None => {
                tracing::debug!(input = %line, "Unrecognized menu choice");
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(LoopState::AwaitingAction)
            }
        }
    }

    fn await_selection(&mut self, customer: &str) -> Result<LoopState> {
        let Some(line) = self.prompt("Select coffee by number: ")? else {
            return self.end_of_input(customer);
        };

        let checked = parse_integer("selection", &line).and_then(|selection| {
            self.session.catalog().get(selection)?;
            Ok(selection)
        });
        match checked {
            Ok(selection) => Ok(LoopState::AwaitingQuantity { selection }),
            Err(e) => self.report(e),
        }
    }

    fn await_quantity(&mut self, customer: &str, selection: i64) -> Result<LoopState> {
        let Some(line) = self.prompt("Enter quantity: ")? else {
            return self.end_of_input(customer);
        };

        let added = parse_integer("quantity", &line)
            .and_then(|quantity| self.session.add_to_cart(selection, quantity));
        match added {
            Ok(addition) => {
                writeln!(self.output, "{}", addition)?;
                Ok(LoopState::AwaitingAction)
            }
            Err(e) => self.report(e),
        }
    }

    /// Shows a recoverable error and returns to the main menu; anything else
    /// is passed up.
    fn report(&mut self, err: ShopError) -> Result<LoopState> {
        if !err.is_recoverable() {
            return Err(err);
        }
        tracing::warn!(error = %err, "Rejected operator input");
        writeln!(self.output, "{}", err.user_friendly_message())?;
        Ok(LoopState::AwaitingAction)
    }

    fn end_of_input(&mut self, customer: &str) -> Result<LoopState> {
        tracing::debug!("Input closed, ending session");
        writeln!(self.output)?;
        writeln!(self.output, "Goodbye, {}!", customer)?;
        Ok(LoopState::Terminated)
    }

    fn record_order(&mut self, grand_total: Money) {
        self.summary.orders += 1;
        match self.summary.revenue.checked_add(grand_total) {
            Some(revenue) => self.summary.revenue = revenue,
            None => tracing::warn!("Session revenue overflowed; keeping previous figure"),
        }
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Coffee Menu:")?;
        for (i, item) in self.session.catalog().list().iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", i + 1, item.name, item.unit_price)?;
        }
        Ok(())
    }

    /// Writes `text` without a newline and reads one line. `None` at end of
    /// input. Bytes that are not UTF-8 are replaced, never rejected.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::debug!("Replaced invalid UTF-8 in operator input");
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
