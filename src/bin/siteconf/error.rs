pub(crate) use anyhow::Context as _;
pub(crate) use anyhow::Result;
