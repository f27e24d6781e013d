pub mod chatbot;
