pub(crate) mod header;
