use std::process::exit;

use lingq2anki::{
    anki::AnkiClient,
    core::ImportError,
    import::run_import,
    lingq::{
        Lingq,
        LingqClient,
    },
    mapping::build_mapping,
    prompt,
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", error);
        exit(1);
    }
}

async fn run() -> Result<(), ImportError> {
    let lingq = login().await?;
    let lingqs = fetch_lingqs(&lingq).await?;

    let mut anki = AnkiClient::new();
    let version = anki.fetch_version().await.map_err(|error| match error {
        ImportError::Reqwest(_) => ImportError::Custom(
            "Cannot connect to AnkiConnect.\nPlease make sure Anki is running and that the \
             AnkiConnect extension is installed."
                .to_string(),
        ),
        other => other,
    })?;
    println!("Connected to AnkiConnect version {}", version);

    let deck_name = select_deck(&anki).await?;
    let model_name = select_model(&anki).await?;
    let fields = anki.model_field_names(&model_name).await?;
    let mapping = build_mapping(&model_name, fields)?;

    run_import(&anki, &deck_name, &model_name, &mapping, &lingqs).await?;
    Ok(())
}

/// Prompts for credentials until LingQ accepts them. Anything other than a
/// bad-credentials response is fatal.
async fn login() -> Result<LingqClient, ImportError> {
    loop {
        let username = prompt::read_line("Enter your LingQ username:\t")?;
        let password = prompt::read_line("Enter your LingQ password:\t")?;

        println!("Connecting to LingQ...");
        match LingqClient::authenticate(&username, &password).await {
            Ok(client) => return Ok(client),
            Err(ImportError::AuthFailed(message)) => {
                eprintln!("HTTP ERROR 400: {}", message);
                println!("Please try logging in again\n");
            }
            Err(error) => return Err(error),
        }
    }
}

async fn fetch_lingqs(lingq: &LingqClient) -> Result<Vec<Lingq>, ImportError> {
    let languages = lingq.languages().await?;

    println!("Select the language you would like to import:");
    for (num, language) in languages.iter().enumerate() {
        println!("{}- {}", num + 1, language.title);
    }
    let selection = prompt::select_from_list(languages.len(), "")?;
    let language = &languages[selection - 1];

    println!("Retrieving all LingQs for {}", language.title);
    println!("This may take several minutes\nPlease wait...");
    let lingqs = lingq.lingqs(&language.code).await?;
    println!("Done.\n");
    Ok(lingqs)
}

async fn select_deck(anki: &AnkiClient) -> Result<String, ImportError> {
    let decks = anki.deck_names().await?;

    println!("Which deck do you want to import the LingQs to?");
    println!("1- Create a new deck");
    for (num, deck) in decks.iter().enumerate() {
        println!("{}- {}", num + 2, deck);
    }

    let selection = prompt::select_from_list(decks.len() + 1, "")?;
    if selection == 1 {
        let name = prompt::read_line("Enter the new deck's name:\t")?;
        println!("Creating deck...");
        anki.create_deck(&name).await?;
        println!("Done creating deck");
        Ok(name)
    } else {
        Ok(decks[selection - 2].clone())
    }
}

async fn select_model(anki: &AnkiClient) -> Result<String, ImportError> {
    let models = anki.model_names().await?;

    println!("Select the model you would like all your LingQs to be added with");
    for (num, model) in models.iter().enumerate() {
        println!("{}- {}", num + 1, model);
    }

    let selection = prompt::select_from_list(models.len(), "")?;
    Ok(models[selection - 1].clone())
}
