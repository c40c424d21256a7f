use std::path::Path;

use anyhow::Result;
use clap::{App, Arg};
use url::Url;

use blogview::api::{BlogApi, HttpBlogApi};
use blogview::config::Config;
use blogview::controller::{PostsController, DEFAULT_PAGE_SIZE};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("blogview")
        .about("Fetches and renders the post list for a personal blog")
        .arg(
            Arg::with_name("project-dir")
                .short("C")
                .long("project-dir")
                .takes_value(true)
                .default_value(".")
                .help("Directory to search for blogview.yaml"),
        )
        .arg(
            Arg::with_name("site-root")
                .long("site-root")
                .takes_value(true)
                .help("Base URL of the deployed blog (bypasses blogview.yaml)"),
        )
        .arg(
            Arg::with_name("meta")
                .long("meta")
                .help("Print the blog metadata object instead of the posts"),
        )
        .get_matches();

    let config = match matches.value_of("site-root") {
        Some(root) => Config {
            site_root: Url::parse(root)?,
            page_size: DEFAULT_PAGE_SIZE,
        },
        // unwrap() can't fail; project-dir has a default value
        None => Config::from_directory(Path::new(
            matches.value_of("project-dir").unwrap(),
        ))?,
    };

    let api = HttpBlogApi::new(config.site_root);

    if matches.is_present("meta") {
        let metadata = api.metadata()?;
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let mut controller = PostsController::with_page_size(api, config.page_size);
    controller.activate();

    if let Some(err) = controller.error() {
        return Err(anyhow::anyhow!("Fetching posts: {}", err));
    }

    for post in controller.posts() {
        println!("# {}", post.title);
        println!("{}", post.date);
        println!();
        println!("{}", post.body);
        println!();
    }

    Ok(())
}
