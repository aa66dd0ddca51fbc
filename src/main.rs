use std::path::PathBuf;

use anyhow::{bail, Context};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;

use raag::*;

const HELP: &str = "\
raag: normal forms and homomorphisms of right-angled Artin groups

USAGE:
  raag reduce <presentation.json> <word>...
  raag apply <homomorphism.json> <word>...
  raag check <homomorphism.json>
  raag encode <presentation.json> --alphabet <chars> <text>...
  raag demo

Words are written as a*b^-1*c, with e for the identity.
Set RUST_LOG=debug for more output.
";

fn load_json<T: DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    match args.subcommand()?.as_deref() {
        Some("reduce") => {
            let path: PathBuf = args.free_from_str()?;
            let presentation = load_json::<PresentationDoc>(&path)?.build()?;
            log::info!("presentation {presentation}");
            for word in args.finish() {
                let word = word.to_string_lossy();
                let element = Element::parse(&presentation, &word)
                    .with_context(|| format!("in word '{word}'"))?;
                println!("{word:30}\t{element}");
            }
        }
        Some("apply") => {
            let path: PathBuf = args.free_from_str()?;
            let hom = load_json::<HomomorphismDoc>(&path)?.build()?;
            log::info!("homomorphism {hom}");
            for word in args.finish() {
                let word = word.to_string_lossy();
                let element = Element::parse(hom.domain(), &word)
                    .with_context(|| format!("in word '{word}'"))?;
                println!("{element:30}\t{}", hom.apply(&element)?);
            }
        }
        Some("check") => {
            let path: PathBuf = args.free_from_str()?;
            let doc = load_json::<HomomorphismDoc>(&path)?;
            match doc.build() {
                Ok(hom) => println!("ok: {hom}"),
                Err(err) => bail!("{}: {err}", path.display()),
            }
        }
        Some("encode") => {
            let chars: String = args.value_from_str("--alphabet")?;
            let path: PathBuf = args.free_from_str()?;
            let presentation = load_json::<PresentationDoc>(&path)?.build()?;
            let alphabet = Alphabet::sequential(&presentation, &chars)?;
            for text in args.finish() {
                let text = text.to_string_lossy();
                let element = alphabet.encode(&text)?;
                println!("{text:30}\t{element}\t{}", alphabet.decode(&element)?);
            }
        }
        Some("demo") => demo()?,
        Some(other) => bail!("unknown command '{other}'\n\n{HELP}"),
        None => print!("{HELP}"),
    }
    Ok(())
}

/// Challenge and response with a secret homomorphism. Nothing here is
/// secure: anyone who sees enough pairs can read the images off.
fn demo() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let domain = Presentation::new(["p", "q"], [("p", "q")])?;
    let codomain = Presentation::new(["r", "s", "t"], [("r", "s")])?;

    // t does not commute with s, so this mapping is not a homomorphism
    let naive = Homomorphism::new(
        &domain,
        &codomain,
        [("p", Word::parse("r*t")?), ("q", Word::parse("s")?)],
    );
    match naive {
        Ok(_) => bail!("p -> r*t, q -> s should have been rejected"),
        Err(err) => println!("rejected p -> r*t, q -> s: {err}"),
    }

    let secret = Homomorphism::new(
        &domain,
        &codomain,
        [("p", Word::parse("r*r")?), ("q", Word::parse("s^-1")?)],
    )?;
    log::info!("secret homomorphism {secret}");

    let letters: Vec<&Symbol> = domain.generators().collect();
    let len = rng.gen_range(3..8);
    let challenge: Word = (0..len)
        .map(|_| {
            let symbol = (*letters.choose(&mut rng).unwrap()).clone();
            Generator::new(symbol, rng.gen_bool(0.3))
        })
        .collect();
    let challenge = Element::new(&domain, &challenge)?;
    println!("challenge: {challenge}");

    let response = secret.apply(&challenge)?;
    println!("response:  {response}");

    // the verifier holds the secret and checks the response against the
    // image of the inverted challenge
    let check = secret.apply(&challenge.invert())?.multiply(&response)?;
    if !check.is_identity() {
        bail!("response {response} does not answer challenge {challenge}");
    }
    println!("verified:  {check} (image of the inverse times the response)");

    let alphabet = Alphabet::sequential(&codomain, "rst")?;
    match alphabet.decode(&response) {
        Ok(text) => println!("as text:   {text}"),
        Err(err) => println!("as text:   unavailable ({err})"),
    }
    Ok(())
}
