pub mod egg_variables_response;
