//! Verb, path and body encoding for every endpoint method.

mod test_utils;

use anemo_client::{
    Body, CreateChatCompletionRequest, CreateCompletionRequest, CreateEditRequest,
    CreateEmbeddingsRequest, CreateFineTuneRequest, CreateImageEditRequest, CreateImageRequest,
    CreateImageVariationRequest, CreateTranscriptionRequest, CreateTranslationRequest, FilePart,
    ImageSize, Method, MockTransport, UploadFileRequest,
};
use anemo_core::ChatMessage;
use serde_json::{Value, json};
use test_utils::mock_client;

const ROOT: &str = "https://api.openai.com/v1";

/// What the last request should have looked like.
#[derive(Debug, PartialEq)]
enum Encoding {
    Empty,
    Json,
    Multipart,
}

fn assert_last(mock: &MockTransport, method: Method, path: &str, encoding: Encoding) {
    let request = mock.last_request().expect("no request recorded");
    assert_eq!(request.method(), &method, "method for {}", path);
    assert_eq!(request.url(), &format!("{}{}", ROOT, path));

    let actual = match request.body() {
        Body::Empty => Encoding::Empty,
        Body::Json(_) => Encoding::Json,
        Body::Multipart(_) => Encoding::Multipart,
    };
    assert_eq!(actual, encoding, "body encoding for {}", path);
}

fn fixture(tag: &str) -> Value {
    json!({"fixture": tag, "nested": {"list": [1, 2, 3]}})
}

#[tokio::test]
async fn test_model_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();

    mock.push_json(200, fixture("list"));
    assert_eq!(client.list_models().await?, fixture("list"));
    assert_last(&mock, Method::GET, "/models", Encoding::Empty);

    mock.push_json(200, fixture("retrieve"));
    assert_eq!(client.retrieve_model("gpt-3.5-turbo").await?, fixture("retrieve"));
    assert_last(&mock, Method::GET, "/models/gpt-3.5-turbo", Encoding::Empty);

    mock.push_json(200, fixture("delete"));
    assert_eq!(
        client.delete_fine_tune_model("curie:ft-acme-2023").await?,
        fixture("delete")
    );
    assert_last(&mock, Method::DELETE, "/models/curie:ft-acme-2023", Encoding::Empty);
    Ok(())
}

#[tokio::test]
async fn test_list_models_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();
    mock.push_json(200, json!({"data": [{"id": "gpt-3.5-turbo"}]}));

    let models = client.list_models().await?;

    assert_eq!(models, json!({"data": [{"id": "gpt-3.5-turbo"}]}));
    Ok(())
}

#[tokio::test]
async fn test_text_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();

    mock.push_json(200, fixture("completion"));
    let completion = CreateCompletionRequest::builder()
        .model("text-davinci-003")
        .prompt("Say this is a test")
        .build()?;
    assert_eq!(client.create_completion(&completion).await?, fixture("completion"));
    assert_last(&mock, Method::POST, "/completions", Encoding::Json);

    mock.push_json(200, fixture("chat"));
    let chat = CreateChatCompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")]);
    assert_eq!(client.create_chat_completion(&chat).await?, fixture("chat"));
    assert_last(&mock, Method::POST, "/chat/completions", Encoding::Json);

    mock.push_json(200, fixture("edit"));
    let edit = CreateEditRequest::builder()
        .model("text-davinci-edit-001")
        .input("What day of the wek is it?")
        .instruction("Fix the spelling mistakes")
        .build()?;
    assert_eq!(client.create_edit(&edit).await?, fixture("edit"));
    assert_last(&mock, Method::POST, "/edits", Encoding::Json);

    mock.push_json(200, fixture("embeddings"));
    let embeddings =
        CreateEmbeddingsRequest::new("text-embedding-ada-002", "The food was delicious");
    assert_eq!(client.create_embeddings(&embeddings).await?, fixture("embeddings"));
    assert_last(&mock, Method::POST, "/embeddings", Encoding::Json);
    Ok(())
}

#[tokio::test]
async fn test_image_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();

    mock.push_json(200, fixture("generate"));
    let generate = CreateImageRequest::builder()
        .prompt("A cute baby sea otter")
        .n(2)
        .size(ImageSize::Large)
        .build()?;
    assert_eq!(client.create_image(&generate).await?, fixture("generate"));
    assert_last(&mock, Method::POST, "/images/generations", Encoding::Json);
    let sent = mock.last_request().ok_or("no request")?;
    assert_eq!(
        sent.body().as_json(),
        Some(&json!({"prompt": "A cute baby sea otter", "n": 2, "size": "1024x1024"}))
    );

    mock.push_json(200, fixture("edit"));
    let edit = CreateImageEditRequest::builder()
        .image(FilePart::new("otter.png", vec![1, 2, 3]))
        .prompt("An otter wearing a beret")
        .build()?;
    assert_eq!(client.create_image_edit(&edit).await?, fixture("edit"));
    assert_last(&mock, Method::POST, "/images/edits", Encoding::Multipart);

    mock.push_json(200, fixture("variation"));
    let variation = CreateImageVariationRequest::builder()
        .image(FilePart::new("otter.png", vec![1, 2, 3]))
        .build()?;
    assert_eq!(client.create_image_variation(&variation).await?, fixture("variation"));
    assert_last(&mock, Method::POST, "/images/variations", Encoding::Multipart);
    Ok(())
}

#[tokio::test]
async fn test_audio_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();
    let clip = FilePart::new("clip.mp3", vec![0u8; 16]).with_mime("audio/mpeg");

    mock.push_json(200, json!({"text": "hello"}));
    let transcription = CreateTranscriptionRequest::new(clip.clone(), "whisper-1");
    assert_eq!(
        client.create_transcription(&transcription).await?,
        json!({"text": "hello"})
    );
    assert_last(&mock, Method::POST, "/audio/transcriptions", Encoding::Multipart);

    mock.push_json(200, json!({"text": "hello"}));
    let translation = CreateTranslationRequest::new(clip, "whisper-1");
    assert_eq!(client.create_translation(&translation).await?, json!({"text": "hello"}));
    assert_last(&mock, Method::POST, "/audio/translations", Encoding::Multipart);
    Ok(())
}

#[tokio::test]
async fn test_file_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();

    mock.push_json(200, fixture("list"));
    assert_eq!(client.list_files().await?, fixture("list"));
    assert_last(&mock, Method::GET, "/files", Encoding::Empty);

    mock.push_json(200, fixture("upload"));
    let upload = UploadFileRequest::new(
        FilePart::new("train.jsonl", b"{\"prompt\":\"a\",\"completion\":\"b\"}\n".to_vec()),
        "fine-tune",
    );
    assert_eq!(client.upload_file(&upload).await?, fixture("upload"));
    assert_last(&mock, Method::POST, "/files", Encoding::Multipart);

    mock.push_json(200, fixture("retrieve"));
    assert_eq!(client.retrieve_file("file-abc123").await?, fixture("retrieve"));
    assert_last(&mock, Method::GET, "/files/file-abc123", Encoding::Empty);

    mock.push_json(200, fixture("delete"));
    assert_eq!(client.delete_file("file-abc123").await?, fixture("delete"));
    assert_last(&mock, Method::DELETE, "/files/file-abc123", Encoding::Empty);

    let jsonl = "{\"prompt\":\"a\"}\n{\"prompt\":\"b\"}\n";
    mock.push_text(200, jsonl);
    assert_eq!(client.retrieve_file_content("file-abc123").await?, jsonl);
    assert_last(&mock, Method::GET, "/files/file-abc123/content", Encoding::Empty);
    Ok(())
}

#[tokio::test]
async fn test_fine_tune_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();

    mock.push_json(200, fixture("create"));
    let create = CreateFineTuneRequest::builder()
        .training_file("file-abc123")
        .build()?;
    assert_eq!(client.create_fine_tune(&create).await?, fixture("create"));
    assert_last(&mock, Method::POST, "/fine-tunes", Encoding::Json);

    mock.push_json(200, fixture("list"));
    assert_eq!(client.list_fine_tunes().await?, fixture("list"));
    assert_last(&mock, Method::GET, "/fine-tunes", Encoding::Empty);

    mock.push_json(200, fixture("retrieve"));
    assert_eq!(client.retrieve_fine_tune("ft-AF1WoRqd3aJ").await?, fixture("retrieve"));
    assert_last(&mock, Method::GET, "/fine-tunes/ft-AF1WoRqd3aJ", Encoding::Empty);

    mock.push_json(200, fixture("cancel"));
    assert_eq!(client.cancel_fine_tune("ft-AF1WoRqd3aJ").await?, fixture("cancel"));
    assert_last(&mock, Method::POST, "/fine-tunes/ft-AF1WoRqd3aJ/cancel", Encoding::Empty);

    mock.push_json(200, fixture("events"));
    assert_eq!(client.list_fine_tune_events("ft-AF1WoRqd3aJ").await?, fixture("events"));
    assert_last(
        &mock,
        Method::GET,
        "/fine-tunes/ft-AF1WoRqd3aJ/events?stream=false",
        Encoding::Empty,
    );
    Ok(())
}

#[tokio::test]
async fn test_file_content_error_still_unwraps_envelope() {
    let (client, mock) = mock_client();
    mock.push_json(
        404,
        json!({
            "error": {"message": "No such File object: file-x", "type": "invalid_request_error"}
        }),
    );

    let err = client.retrieve_file_content("file-x").await.unwrap_err();
    assert_eq!(err.to_string(), "No such File object: file-x");
}
