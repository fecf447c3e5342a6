mod browse_project;
mod document_order;
