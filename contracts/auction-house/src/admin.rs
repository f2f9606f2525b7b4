use crate::{storage, Error};
use soroban_sdk::{Address, Env};

pub fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    let settings = storage::get_settings(env).ok_or(Error::NotInitialized)?;
    if settings.admin != *admin {
        return Err(Error::Unauthorized);
    }
    storage::extend_instance_ttl(env);
    Ok(())
}
