use serde::{Deserialize, Serialize};

pub type ProductId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Stock is fetched fresh at mutation time and never kept in cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLine {
    pub fn new(product: Product, amount: u32) -> Self {
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Ordered cart contents. At most one line per product id; a line's amount
/// is always >= 1 (a would-be zero line is removed or rejected upstream).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(index))
    }

    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.line(id).map(|line| line.amount).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// User-facing outcome of a failed operation. The view layer renders these;
/// it never sees the underlying error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    OutOfStock { product_id: ProductId },
    AddFailed { product_id: ProductId },
    RemoveFailed { product_id: ProductId },
    UpdateFailed { product_id: ProductId },
}

impl Notice {
    pub fn product_id(&self) -> ProductId {
        match *self {
            Notice::OutOfStock { product_id }
            | Notice::AddFailed { product_id }
            | Notice::RemoveFailed { product_id }
            | Notice::UpdateFailed { product_id } => product_id,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock { .. } => "Requested amount is out of stock",
            Notice::AddFailed { .. } => "Could not add product to cart",
            Notice::RemoveFailed { .. } => "Could not remove product from cart",
            Notice::UpdateFailed { .. } => "Could not update product amount",
        }
    }
}
