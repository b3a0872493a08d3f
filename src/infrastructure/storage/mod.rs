mod ascii_json;
pub(crate) mod fs_store;
