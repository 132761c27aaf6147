mod literal_parser_tests;
