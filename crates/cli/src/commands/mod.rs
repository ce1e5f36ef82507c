pub(crate) mod check;
pub(crate) mod lead;
pub(crate) mod methods;
