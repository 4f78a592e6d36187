use anyhow::Context;
use chrono::{Duration, Utc};
use mural_api::{Author, ContentBlock, Post, PostId};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const MAX_PARAGRAPHS: usize = 4;
const PARAGRAPH_WORDS: usize = 25;
const LINK_WORDS: usize = 2;

// Posts are spread over the last year
const MAX_AGE_MINUTES: i64 = 60 * 24 * 365;

const ROLES: &[&str] = &["CTO", "Educator", "Web Developer", "Designer", "Intern"];

#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of posts to generate
    #[structopt(short, long, default_value = "10")]
    posts: usize,

    /// Seed for reproducible output
    #[structopt(short, long)]
    seed: Option<u64>,
}

fn gen_author(rng: &mut impl Rng) -> Author {
    let name = lipsum::lipsum_words_with_rng(&mut *rng, 2);
    let role = ROLES.choose(rng).copied().unwrap_or("Developer");
    let handle = name.to_lowercase().replace(|c: char| !c.is_alphanumeric(), "");
    Author {
        avatar_url: format!("https://github.com/{handle}.png"),
        role: String::from(role),
        name,
    }
}

fn gen_content(rng: &mut impl Rng) -> Vec<ContentBlock> {
    let num_paragraphs = rng.gen_range(1..=MAX_PARAGRAPHS);
    let mut content = (0..num_paragraphs)
        .map(|_| ContentBlock::paragraph(lipsum::lipsum_words_with_rng(&mut *rng, PARAGRAPH_WORDS)))
        .collect::<Vec<_>>();
    if rng.gen_bool(0.5) {
        let text = lipsum::lipsum_words_with_rng(&mut *rng, LINK_WORDS)
            .to_lowercase()
            .replace(' ', ".");
        let href = rng.gen_bool(0.5).then(|| format!("https://{text}"));
        content.push(ContentBlock::link(text, href));
    }
    content
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = Utc::now();
    let posts = (0..opt.posts)
        .map(|i| Post {
            id: PostId(i as u64 + 1),
            author: gen_author(&mut rng),
            published_at: now - Duration::minutes(rng.gen_range(0..MAX_AGE_MINUTES)),
            content: gen_content(&mut rng),
        })
        .collect::<Vec<_>>();
    tracing::info!(num_posts = posts.len(), "generated feed");

    let json = serde_json::to_string_pretty(&posts).context("serializing generated feed")?;
    println!("{json}");
    Ok(())
}
