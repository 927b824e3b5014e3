use annai_core::{Message, SearchResult};

const PREAMBLE: &str = "Use the following pieces of context to answer the question at the end. \
If you don't know the answer, just say that you don't know, don't try to make up an answer.";

/// Stuffs every retrieved chunk, in retrieval order, into one grounding
/// prompt. An empty context section is fine; the preamble already tells the
/// model to admit ignorance.
pub(crate) fn grounding_messages(question: &str, context: &[SearchResult]) -> Vec<Message> {
    let context_text = context
        .iter()
        .map(|result| result.document.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    vec![Message::user(format!(
        "{PREAMBLE}\n\n{context_text}\n\nQuestion: {question}\nHelpful answer:"
    ))]
}
