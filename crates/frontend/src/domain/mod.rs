pub mod a001_orphanage;
