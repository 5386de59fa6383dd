pub(crate) mod coordinate;
