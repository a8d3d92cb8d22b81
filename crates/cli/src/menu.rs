//! The interactive menu loop.
//!
//! Generic over reader/writer so tests drive a whole session with scripted
//! input and capture the output. EOF at any prompt ends the session cleanly,
//! which also makes `echo "..." | stockbook` usable.

use std::io::{BufRead, Write};

use anyhow::Result;

use stockbook_catalog::{CatalogStore, NewProduct, Product};
use stockbook_core::ProductId;

use crate::format::{self, OutputMode};

pub struct MenuSession<R, W> {
    store: CatalogStore,
    mode: OutputMode,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(store: CatalogStore, mode: OutputMode, input: R, out: W) -> Self {
        Self {
            store,
            mode,
            input,
            out,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn into_store(self) -> CatalogStore {
        self.store
    }

    /// Run the menu until the operator exits or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let exit = self.dispatch(choice.as_str())?;
            let open = self.pause()?;
            if exit || !open {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<bool> {
        match choice {
            "1" => self.view_all()?,
            "2" => self.search()?,
            "3" => self.add()?,
            "4" => self.update()?,
            "5" => self.delete()?,
            "6" => self.history()?,
            "7" => {
                writeln!(
                    self.out,
                    "\nThank you for using the Inventory Management System!"
                )?;
                return Ok(true);
            }
            _ => writeln!(self.out, "Invalid choice. Please try again.")?,
        }
        Ok(false)
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "===================================")?;
        writeln!(self.out, "STOCKBOOK INVENTORY TRACKER")?;
        writeln!(self.out, "===================================")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "MAIN MENU:")?;
        writeln!(self.out, "1. View All Products")?;
        writeln!(self.out, "2. Search Products")?;
        writeln!(self.out, "3. Add New Product")?;
        writeln!(self.out, "4. Update Product")?;
        writeln!(self.out, "5. Delete Product")?;
        writeln!(self.out, "6. View Transaction History")?;
        writeln!(self.out, "7. Exit")?;
        writeln!(self.out)?;
        self.prompt("Enter your choice (1-7): ")
    }

    fn view_all(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== ALL PRODUCTS ===")?;
        let products = self.store.list();
        if products.is_empty() {
            writeln!(self.out, "No products found.")?;
            return Ok(());
        }
        self.display_products(&products)
    }

    fn search(&mut self) -> Result<()> {
        self.prompt("\nEnter search term (name or category): ")?;
        let Some(query) = self.read_line()? else {
            return Ok(());
        };

        let results = self.store.search(&query);
        writeln!(self.out, "\n=== SEARCH RESULTS ===")?;
        if results.is_empty() {
            writeln!(self.out, "No products found matching '{query}'")?;
            return Ok(());
        }
        self.display_products(&results)
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== ADD NEW PRODUCT ===")?;

        self.prompt("Enter product name: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };
        let Some(price) = self.prompt_price("Enter product price: $")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_quantity("Enter product quantity: ")? else {
            return Ok(());
        };
        self.prompt("Enter product category: ")?;
        let Some(category) = self.read_line()? else {
            return Ok(());
        };

        let product = self.store.add(NewProduct::new(name, price, quantity, category));
        tracing::info!(id = %product.id(), "product added");
        writeln!(self.out, "\nProduct added successfully:")?;
        self.display_product(&product)
    }

    fn update(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== UPDATE PRODUCT ===")?;

        self.prompt("Enter product ID to update: ")?;
        let Some(raw) = self.read_line()? else {
            return Ok(());
        };
        let Some(current) = self.lookup(&raw)? else {
            return Ok(());
        };

        writeln!(self.out, "Current product details:")?;
        writeln!(self.out, "{current}")?;

        self.prompt(&format!(
            "\nEnter new name (press Enter to keep '{}'): ",
            current.name()
        ))?;
        let Some(name_input) = self.read_line()? else {
            return Ok(());
        };
        let name = if name_input.is_empty() {
            current.name().to_string()
        } else {
            name_input
        };

        self.prompt(&format!(
            "Enter new price (press Enter to keep ${:.2}): ",
            current.price()
        ))?;
        let Some(price_input) = self.read_line()? else {
            return Ok(());
        };
        let price = if price_input.is_empty() {
            current.price()
        } else {
            match price_input.parse() {
                Ok(v) => v,
                Err(_) => {
                    writeln!(self.out, "Invalid price. Keeping the current price.")?;
                    current.price()
                }
            }
        };

        self.prompt(&format!(
            "Enter new quantity (press Enter to keep {}): ",
            current.quantity()
        ))?;
        let Some(quantity_input) = self.read_line()? else {
            return Ok(());
        };
        let quantity = if quantity_input.is_empty() {
            current.quantity()
        } else {
            match quantity_input.parse() {
                Ok(v) => v,
                Err(_) => {
                    writeln!(self.out, "Invalid quantity. Keeping the current quantity.")?;
                    current.quantity()
                }
            }
        };

        self.prompt(&format!(
            "Enter new category (press Enter to keep '{}'): ",
            current.category()
        ))?;
        let Some(category_input) = self.read_line()? else {
            return Ok(());
        };
        let category = if category_input.is_empty() {
            current.category().to_string()
        } else {
            category_input
        };

        match self
            .store
            .update(current.id(), NewProduct::new(name, price, quantity, category))
        {
            Ok(updated) => {
                tracing::info!(id = %updated.id(), "product updated");
                writeln!(self.out, "\nProduct updated successfully:")?;
                self.display_product(&updated)?;
            }
            Err(_) => writeln!(self.out, "Error updating product.")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== DELETE PRODUCT ===")?;

        self.prompt("Enter product ID to delete: ")?;
        let Some(raw) = self.read_line()? else {
            return Ok(());
        };
        let Some(product) = self.lookup(&raw)? else {
            return Ok(());
        };

        writeln!(self.out, "Product to delete:")?;
        writeln!(self.out, "{product}")?;

        self.prompt("Are you sure you want to delete this product? (y/n): ")?;
        let Some(confirmation) = self.read_line()? else {
            return Ok(());
        };
        if !matches!(confirmation.to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.out, "Deletion cancelled.")?;
            return Ok(());
        }

        let deleted = self.store.delete(product.id());
        if deleted {
            tracing::info!(id = %product.id(), "product deleted");
            writeln!(self.out, "Product deleted successfully.")?;
        } else {
            writeln!(self.out, "Error deleting product.")?;
        }
        if self.mode == OutputMode::Json {
            writeln!(self.out, "{}", format::deletion_json(product.id(), deleted))?;
        }
        Ok(())
    }

    fn history(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== TRANSACTION HISTORY ===")?;
        let transactions = self.store.history();
        if transactions.is_empty() {
            writeln!(self.out, "No transactions recorded yet.")?;
            return Ok(());
        }

        match self.mode {
            OutputMode::Json => {
                writeln!(self.out, "{}", format::transactions_json(&transactions)?)?;
            }
            OutputMode::Human => {
                for tx in &transactions {
                    writeln!(self.out, "{}", format::transaction_line(tx))?;
                }
                writeln!(self.out, "Total transactions: {}", transactions.len())?;
            }
        }
        Ok(())
    }

    /// Resolve operator input to a live product. Malformed ids fall out the
    /// same not-found path as unknown ones, matching exact-key lookup.
    fn lookup(&mut self, raw: &str) -> Result<Option<Product>> {
        let found = raw
            .parse::<ProductId>()
            .ok()
            .and_then(|id| self.store.get(id).cloned());
        if found.is_none() {
            tracing::debug!(id = raw, "product lookup failed");
            writeln!(self.out, "Product not found with ID: {raw}")?;
        }
        Ok(found)
    }

    fn display_products(&mut self, products: &[Product]) -> Result<()> {
        match self.mode {
            OutputMode::Json => writeln!(self.out, "{}", format::products_json(products)?)?,
            OutputMode::Human => {
                for product in products {
                    writeln!(self.out, "{product}")?;
                }
                writeln!(self.out, "Total products: {}", products.len())?;
            }
        }
        Ok(())
    }

    fn display_product(&mut self, product: &Product) -> Result<()> {
        match self.mode {
            OutputMode::Json => writeln!(self.out, "{}", format::product_json(product)?)?,
            OutputMode::Human => writeln!(self.out, "{product}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Re-prompt until the line parses as a price. `None` on EOF.
    fn prompt_price(&mut self, text: &str) -> Result<Option<f64>> {
        loop {
            self.prompt(text)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "Please enter a valid number.")?,
            }
        }
    }

    /// Re-prompt until the line parses as a quantity. `None` on EOF.
    fn prompt_quantity(&mut self, text: &str) -> Result<Option<i64>> {
        loop {
            self.prompt(text)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "Please enter a valid integer.")?,
            }
        }
    }

    /// One trimmed line of input, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn pause(&mut self) -> Result<bool> {
        writeln!(self.out, "\nPress Enter to continue...")?;
        Ok(self.read_line()?.is_some())
    }
}
