pub mod buttons;
pub mod fonts;
pub mod sizes;
pub mod text;
