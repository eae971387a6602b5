use crate::error::SponsorsError;
use crate::Factory;

use super::gql::GqlSponsorClient;
use super::table::TableRenderer;
use super::{SponsorListRenderer, SponsorLister, User};

/// Arguments of `list`. The positional values are taken raw and checked
/// by [`new_cmd_list`] so we can give a useful message.
#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// The user whose sponsors to list
    #[arg(value_name = "USER", num_args = 0..)]
    pub args: Vec<String>,
}

/// Everything one run of `list` needs
pub struct Options {
    pub user: User,
    pub sponsor_lister: Box<dyn SponsorLister>,
    pub sponsor_list_renderer: Box<dyn SponsorListRenderer>,
}

/// Validate the arguments, build the default options and hand them to `run`.
/// Argument errors are returned before anything touches the network.
pub fn new_cmd_list<F>(factory: &Factory, args: &ListArgs, run: F) -> Result<(), SponsorsError>
where
    F: FnOnce(Options) -> Result<(), SponsorsError>,
{
    let user = match args.args.as_slice() {
        [] => return Err(SponsorsError::flag("must specify a user")),
        [user] => User::from(user.clone()),
        _ => return Err(SponsorsError::flag("too many arguments")),
    };

    let transport = (factory.http_client)()?;
    let options = Options {
        user,
        sponsor_lister: Box::new(GqlSponsorClient::new(transport, &factory.hostname)),
        sponsor_list_renderer: Box::new(TableRenderer::new((factory.output)())),
    };

    run(options)
}

/// Fetch the sponsors and render them
pub fn list_run(options: Options) -> Result<(), SponsorsError> {
    let Options {
        user,
        sponsor_lister,
        mut sponsor_list_renderer,
    } = options;

    let sponsors = sponsor_lister.list_sponsors(&user)?;
    sponsor_list_renderer.render(&sponsors)?;

    Ok(())
}
