//! Site components

mod cards;
mod footer;
mod nav;
mod quote_form;

pub use cards::*;
pub use footer::Footer;
pub use nav::MarketingNav;
pub use quote_form::QuoteForm;
