use super::{read_answers_file, AppContext};
use crate::codec::{answers_token, decode, encode, share_link};
use crate::content::Content;
use anyhow::Result;
use std::path::Path;

pub fn handle_encode(path: &Path, token_only: bool, app: &AppContext) -> Result<()> {
    let answers = read_answers_file(path, &Content::standard())?;
    if token_only {
        println!("{}", encode(&answers));
    } else {
        println!("{}", share_link(&app.config.share.base_url, &answers));
    }
    Ok(())
}

/// Print the answers carried by a token or link. Undecodable input prints `{}`.
pub fn handle_decode(input: &str) -> Result<()> {
    let answers = match answers_token(input).and_then(decode) {
        Some(answers) => answers,
        None => {
            tracing::warn!("no answers could be decoded from the input");
            Default::default()
        }
    };
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}
