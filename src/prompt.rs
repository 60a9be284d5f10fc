use crate::model::Message;

pub fn build_prompt(document: &str, question: &str) -> String {
    format!(
        "You are an assistant that extracts information from documents.\n\
         Document:\n\
         ---\n\
         {document}\n\
         ---\n\
         Question: {question}\n\
         Provide a concise and clear answer."
    )
}

pub fn build_messages(system_prompt: &str, prompt: impl Into<String>) -> Vec<Message> {
    vec![Message::system(system_prompt), Message::user(prompt)]
}
