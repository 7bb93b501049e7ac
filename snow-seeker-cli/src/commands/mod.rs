pub(crate) mod config;
pub(crate) mod facilities;
pub(crate) mod favorite;
pub(crate) mod list;
pub(crate) mod show;

use snow_seeker_lib::{AppContext, Resort};

use crate::error::CliError;

/// Look up a resort or fail with [`CliError::UnknownResort`].
pub(crate) fn require_resort<'a>(ctx: &'a AppContext, id: &str) -> Result<&'a Resort, CliError> {
    ctx.resort(id)
        .ok_or_else(|| CliError::unknown_resort(id))
}
