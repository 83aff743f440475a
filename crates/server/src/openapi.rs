use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WordEntryDoc { pub id: i32, pub word: String, pub translation: String }

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::words::add_word,
        crate::routes::words::list_words,
        crate::routes::words::delete_word,
    ),
    components(
        schemas(
            HealthResponse,
            WordEntryDoc,
            DetailDoc,
            crate::routes::words::AddWordRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "words")
    )
)]
pub struct ApiDoc;
