mod kind_priority_tests;
mod sort_document_tests;
