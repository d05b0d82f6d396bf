pub mod venue_api;
