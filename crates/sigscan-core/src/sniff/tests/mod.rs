mod tests_sniff;
